use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;

/// Paragraph count bounds exposed by the UI.
const MIN_PARAGRAPHS: usize = 1;
const MAX_PARAGRAPHS: usize = 100;

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/v1/generate` with query parameters.
    fn get_generated(&self, count: usize, format: &str) -> Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/generate")
            .query(&[("count", count.to_string()), ("format", format.to_owned())])
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a GET request to `/v1/banks`.
    fn get_banks(&self) -> Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/banks")
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a GET request to `/v1/loaded_bank`.
    fn get_loaded_bank(&self) -> Result<String> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/loaded_bank")
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a PUT request to `/v1/load_bank` with the bank name.
    fn put_load_bank(&self, name: &str) -> Result<String> {
        let response = self.client
            .put("http://127.0.0.1:5000/v1/load_bank")
            .query(&[("name", name)])
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

/// Global UI state (MUST persist between frames in egui).
struct FidsumUI {
    rest: RESTContext,
    count: usize,                 // paragraph count to request
    paragraphs: Vec<String>,      // last generated paragraphs
    status: Option<String>,       // last error or confirmation message
    selected_bank: String,        // bank currently loaded on the server
    available_banks: Vec<String>, // banks listed by the server
}

impl FidsumUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            count: 1,
            paragraphs: Vec::new(),
            status: None,
            selected_bank: String::new(),
            available_banks: Vec::new(),
        };
        ui.get_banks();
        ui.get_loaded_bank();
        Ok(ui)
    }

    /// Performs the generation request and splits the plain-text
    /// response back into paragraphs (blank-line separated).
    fn get_generated(&mut self) {
        match self.rest.get_generated(self.count, "text") {
            Ok(text) => {
                self.paragraphs = text.split("\n\n").map(str::to_owned).collect();
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Performs the bank listing request.
    fn get_banks(&mut self) {
        match self.rest.get_banks() {
            Ok(body) => {
                self.available_banks = body
                    .lines()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Performs the loaded-bank request (first response line is the name).
    fn get_loaded_bank(&mut self) {
        match self.rest.get_loaded_bank() {
            Ok(body) => {
                self.selected_bank = body.lines().next().unwrap_or("").to_owned();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Performs the load-bank request.
    fn put_load_bank(&mut self, name: &str) {
        match self.rest.put_load_bank(name) {
            Ok(_) => {
                self.selected_bank = name.to_owned();
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Rebuilds the clipboard payload the same way the web front-end
    /// did: every paragraph wrapped in a `<p>` block.
    ///
    /// Deliberately rebuilt client-side rather than requested with
    /// `format=html`: a second generate call would draw a different
    /// random sequence, and the copied HTML must match the paragraphs
    /// on screen.
    fn html_payload(&self) -> String {
        let mut formatted = String::new();
        for paragraph in &self.paragraphs {
            formatted.push_str("<p>");
            formatted.push_str(paragraph);
            formatted.push_str("</p>");
        }
        formatted
    }
}

impl eframe::App for FidsumUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lorem Fidsum");
            ui.label("Placeholder text, one questionable phrase at a time.");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Paragraphs");
                ui.add(
                    egui::DragValue::new(&mut self.count)
                        .range(MIN_PARAGRAPHS..=MAX_PARAGRAPHS)
                        .speed(1),
                );

                let label = if self.count == 1 {
                    "Generate 1 paragraph".to_owned()
                } else {
                    format!("Generate {} paragraphs", self.count)
                };
                if ui.button(label).clicked() {
                    self.get_generated();
                }

                if !self.paragraphs.is_empty() && ui.button("Copy to clipboard").clicked() {
                    ctx.copy_text(self.html_payload());
                    self.status = Some("Copied!".to_owned());
                }
            });

            ui.separator();

            // Bank selection (one bank loaded server-side at a time)
            ui.horizontal(|ui| {
                ui.label("Phrase bank:");
                let mut selection: Option<String> = None;
                for bank in &self.available_banks {
                    if ui
                        .radio(self.selected_bank == *bank, bank)
                        .clicked()
                    {
                        selection = Some(bank.clone());
                    }
                }
                if let Some(bank) = selection {
                    self.put_load_bank(&bank);
                }
            });

            ui.separator();

            if let Some(status) = &self.status {
                ui.label(status.clone());
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.paragraphs.is_empty() {
                    ui.label("Click Generate to start");
                } else {
                    for paragraph in &self.paragraphs {
                        ui.label(egui::RichText::new(paragraph).italics().size(16.0));
                        ui.add_space(8.0);
                    }
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "lorem-fidsum",
        options,
        Box::new(|_| Ok(Box::new(FidsumUI::new()?))),
    )
}

use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;

use fidsum_core::format;
use fidsum_core::io::{list_banks, read_phrase_bank};
use fidsum_core::model::generation_request::GenerationRequest;
use fidsum_core::model::generator::{DEFAULT_SOFT_CAP, ParagraphGenerator};
use fidsum_core::model::phrase_bank::PhraseBank;

/// Directory holding the phrase bank files (`<name>.txt`).
const DATA_DIR: &str = "./data";

/// Bank loaded at startup when present.
const DEFAULT_BANK: &str = "fidler";

/// Upper bound on the requested paragraph count, same as the UI input
/// bound. The core only requires `count >= 1`; the service edge is
/// where a sane range is enforced, so an absurd count cannot tie up or
/// abort a worker.
const MAX_COUNT: usize = 100;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	soft_cap: Option<usize>,
	format: Option<String> // -> text (default), html or json
}

#[derive(Deserialize)]
struct BankQuery {
	name: Option<String>
}

struct SharedData {
	name: String,
	bank: PhraseBank
}

enum OutputFormat {
	Text,
	Html,
	Json,
}

impl GenerateParams {
	/// Determines the response rendering for the generated paragraphs.
	fn output_format(&self) -> Result<OutputFormat, String> {
		match self.format.as_deref() {
			None => Ok(OutputFormat::Text),
			Some(s) if s.eq_ignore_ascii_case("text") => Ok(OutputFormat::Text),
			Some(s) if s.eq_ignore_ascii_case("html") => Ok(OutputFormat::Html),
			Some(s) if s.eq_ignore_ascii_case("json") => Ok(OutputFormat::Json),
			Some(other) => Err(format!("Unknown format '{other}', expected 'text', 'html' or 'json'")),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates paragraphs from the currently loaded phrase bank.
/// Each call builds its own generation request, so concurrent calls are
/// independent apart from the shared bank behind the lock.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("Paragraph count must be at most {MAX_COUNT}"));
	}
	let soft_cap = query.soft_cap.unwrap_or(DEFAULT_SOFT_CAP);

	let output_format = match query.output_format() {
		Ok(f) => f,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bank lock failed"),
	};

	let request = match GenerationRequest::new(&shared_data.bank, count) {
		Ok(r) => r,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let paragraphs = ParagraphGenerator::with_soft_cap(soft_cap).generate(&request);

	match output_format {
		OutputFormat::Text => HttpResponse::Ok().body(format::to_plain_text(&paragraphs)),
		OutputFormat::Html => HttpResponse::Ok().body(format::to_html(&paragraphs)),
		OutputFormat::Json => HttpResponse::Ok().json(paragraphs),
	}
}

#[get("/v1/banks")]
async fn get_banks() -> impl Responder {
	match list_banks(DATA_DIR) {
		Ok(banks) => HttpResponse::Ok().body(banks.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list phrase banks")
	}
}

#[get("/v1/loaded_bank")]
async fn get_loaded_bank(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bank lock failed"),
	};
	HttpResponse::Ok().body(format!("{}\n{}", shared_data.name, shared_data.bank.len()))
}

#[put("/v1/load_bank")]
async fn put_bank(data: web::Data<Mutex<SharedData>>, query: web::Query<BankQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty bank name"),
	};

	// Bank names are bare file stems, never paths.
	if name.contains(['/', '\\']) || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid bank name");
	}

	let bank_path = format!("{DATA_DIR}/{name}.txt");
	let bank = match read_phrase_bank(&bank_path) {
		Ok(b) => b,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load bank: {e}"))
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bank lock failed"),
	};

	shared_data.name = name.to_owned();
	shared_data.bank = bank;

	HttpResponse::Ok().body("Bank loaded successfully")
}

/// Main entry point for the server.
///
/// Loads the default phrase bank when available, wraps the shared state
/// in a `Mutex`, and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is permissive so a browser front-end can call the API directly.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let shared_data = match read_phrase_bank(format!("{DATA_DIR}/{DEFAULT_BANK}.txt")) {
		Ok(bank) => SharedData { name: DEFAULT_BANK.to_owned(), bank },
		Err(_) => SharedData { name: String::new(), bank: PhraseBank::new(Vec::new()) },
	};
	let shared_bank = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_bank.clone())
			.service(get_generated)
			.service(get_banks)
			.service(get_loaded_bank)
			.service(put_bank)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use actix_web::http::StatusCode;
	use actix_web::test;

	use super::*;

	fn test_data() -> web::Data<Mutex<SharedData>> {
		let bank = PhraseBank::new(vec![
			"Alpha beta.".to_owned(),
			"Gamma delta.".to_owned(),
			"Epsilon zeta.".to_owned(),
		]);
		web::Data::new(Mutex::new(SharedData { name: "test".to_owned(), bank }))
	}

	#[actix_web::test]
	async fn generate_rejects_count_above_bound() {
		let app =
			test::init_service(App::new().app_data(test_data()).service(get_generated)).await;

		// usize::MAX parses fine from the query string; it must be
		// rejected before a request is ever built.
		let huge = test::TestRequest::get()
			.uri("/v1/generate?count=18446744073709551615")
			.to_request();
		let response = test::call_service(&app, huge).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);

		let above = test::TestRequest::get()
			.uri("/v1/generate?count=101")
			.to_request();
		let response = test::call_service(&app, above).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn generate_accepts_count_at_bound() {
		let app =
			test::init_service(App::new().app_data(test_data()).service(get_generated)).await;

		let request = test::TestRequest::get()
			.uri("/v1/generate?count=100")
			.to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[actix_web::test]
	async fn generate_rejects_zero_count() {
		let app =
			test::init_service(App::new().app_data(test_data()).service(get_generated)).await;

		let request = test::TestRequest::get()
			.uri("/v1/generate?count=0")
			.to_request();
		let response = test::call_service(&app, request).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}
}

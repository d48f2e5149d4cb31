use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::types::Dataset;
use crate::error::{Result, ViewerError};

fn fetch_error(url: &str, err: JsValue) -> ViewerError {
	ViewerError::Fetch {
		url: url.to_string(),
		reason: format!("{err:?}"),
	}
}

async fn resolve(promise: js_sys::Promise, url: &str) -> Result<JsValue> {
	JsFuture::from(promise)
		.await
		.map_err(|err| fetch_error(url, err))
}

/// GETs `url` and parses the body as a [`Dataset`].
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
	let window = web_sys::window().ok_or_else(|| ViewerError::Host("no global window".into()))?;

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);
	let request =
		Request::new_with_str_and_init(url, &opts).map_err(|err| fetch_error(url, err))?;

	let response: Response = resolve(window.fetch_with_request(&request), url)
		.await?
		.dyn_into()
		.map_err(|err| fetch_error(url, err))?;
	if !response.ok() {
		return Err(ViewerError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|err| fetch_error(url, err))?;
	let text = resolve(body, url)
		.await?
		.as_string()
		.ok_or_else(|| ViewerError::Fetch {
			url: url.to_string(),
			reason: "response body is not text".into(),
		})?;

	let dataset = Dataset::from_json(&text)?;
	info!(
		"loaded {} points and {} edges from {url}",
		dataset.points.len(),
		dataset.edges.len()
	);
	Ok(dataset)
}

//! Utility functions for the CRM component: lead-form validation, currency
//! and date formatting, the toast notification, and the CSV download
//! trigger.

use base64::{engine::general_purpose, Engine as _};
use common::requests::SaveLeadRequest;
use num_format::{Locale, ToFormattedString};
use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlElement};

/// Checks the lead form before anything is sent to the backend. A failed
/// check means no request is issued and the collection is untouched.
///
/// Required: first name, last name, company, and a plausible email. The
/// deal value cannot fail here; it is unsigned by type.
pub fn validate_draft(draft: &SaveLeadRequest) -> Result<(), String> {
    if draft.first_name.trim().is_empty() || draft.last_name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if draft.company.trim().is_empty() {
        return Err("Company is required".to_string());
    }
    let email = draft.email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !re.is_match(email) {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_currency(value: u64) -> String {
    format!("${}", value.to_formatted_string(&Locale::en))
}

/// Locale date for an ISO-8601 timestamp, e.g. `8/27/2026`.
pub fn format_date(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

/// Epoch milliseconds, for the export filename.
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Displays a temporary notification at the bottom of the screen and
/// removes it after a few seconds. Non-blocking feedback for every remote
/// operation outcome.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(0, 0, 0, 0.85)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-size", "14px").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

/// Triggers a browser download of the CSV content via a base64 data URL on
/// a generated anchor element.
pub fn download_csv(csv: &str, filename: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                let encoded = general_purpose::STANDARD.encode(csv);
                anchor.set_href(&format!("data:text/csv;base64,{encoded}"));
                anchor.set_download(filename);
                anchor.click();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SaveLeadRequest {
        SaveLeadRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Analytical Engines".into(),
            email: "ada@analytical.example".into(),
            ..SaveLeadRequest::default()
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut d = draft();
        d.email = "".into();
        assert_eq!(validate_draft(&d), Err("Email is required".to_string()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut d = draft();
        d.email = "not-an-email".into();
        assert!(validate_draft(&d).is_err());
        d.email = "two words@x.example".into();
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn whitespace_only_company_is_rejected() {
        let mut d = draft();
        d.company = "   ".into();
        assert_eq!(validate_draft(&d), Err("Company is required".to_string()));
    }

    #[test]
    fn currency_has_thousands_separators() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(1250000), "$1,250,000");
    }
}

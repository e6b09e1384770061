#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
use chrono::NaiveDate;
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn intl_format(num: f64, opts: &Object) -> Option<String> {
    with_bundle(|bundle| {
        let locales = js_sys::Array::new();
        locales.push(&JsValue::from_str(&bundle.lang));
        let nf = Intl::NumberFormat::new(&locales, opts);
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn set_opt(opts: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(opts, &JsValue::from_str(key), value);
}

/// Insert a comma between every group of three digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn grouped(text: &str) -> String {
    let (sign, body) = text
        .strip_prefix('-')
        .map_or(("", text), |rest| ("-", rest));
    match body.split_once('.') {
        Some((whole, frac)) => format!("{sign}{}.{frac}", group_digits(whole)),
        None => format!("{sign}{}", group_digits(body)),
    }
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        intl_format(num, &Object::new()).unwrap_or_else(|| grouped(&num.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        grouped(&num.to_string())
    }
}

/// Format a percentage to one decimal place, without the percent sign.
#[must_use]
pub fn fmt_pct(pct: f64) -> String {
    fmt_number(greyn_core::numbers::round_1dp(pct))
}

/// Format a dollar amount (USD) using the current locale via Intl
#[must_use]
pub fn fmt_currency(amount: f64) -> String {
    fn fallback_usd(amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{sign}${}", grouped(&format!("{:.2}", amount.abs())))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let opts = Object::new();
        set_opt(&opts, "style", &JsValue::from_str("currency"));
        set_opt(&opts, "currency", &JsValue::from_str("USD"));
        intl_format(amount, &opts).unwrap_or_else(|| fallback_usd(amount))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_usd(amount)
    }
}

/// Format a calendar date using the current locale (browser-side)
#[must_use]
pub fn fmt_date(date: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let opts = Object::new();
            set_opt(&opts, "timeZone", &JsValue::from_str("UTC"));
            Date::new(&JsValue::from_str(&iso))
                .to_locale_date_string(&bundle.lang, &opts)
                .as_string()
                .unwrap_or_else(|| iso.clone())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        iso
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn number_and_pct_formatters_use_host_fallback() {
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(125_000.0), "125,000");
        assert_eq!(fmt_number(-1_234.25), "-1,234.25");
        assert_eq!(fmt_pct(14.46), "14.5");
    }

    #[test]
    fn date_formatter_returns_iso_on_host() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(fmt_date(date), "2024-01-15");
    }

    #[test]
    fn currency_formatter_groups_and_signs() {
        assert_eq!(fmt_currency(5_500.0), "$5,500.00");
        assert_eq!(fmt_currency(18.5), "$18.50");
        assert_eq!(fmt_currency(-0.99), "-$0.99");
        assert_eq!(fmt_currency(999.0), "$999.00");
    }
}

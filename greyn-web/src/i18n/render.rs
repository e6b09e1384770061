use crate::i18n::bundle::with_bundle;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

/// Interpolation arguments, keyed by placeholder name.
pub type Args<'a> = BTreeMap<&'a str, &'a str>;

/// Walk a dotted key such as `marketplace.showing` through the bundle.
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

/// CLDR plural category for `count`.
#[cfg(target_arch = "wasm32")]
fn plural_category(lang: &str, count: f64) -> String {
    let locales = Array::of1(&wasm_bindgen::JsValue::from_str(lang));
    Intl::PluralRules::new(&locales, &Object::new())
        .select(count)
        .as_string()
        .unwrap_or_else(|| host_category(count).to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn plural_category(_lang: &str, count: f64) -> String {
    host_category(count).to_string()
}

/// English and Spanish share the one/other split for whole counts.
fn host_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

/// Choose the template of a plural object. `_` is the catch-all form.
fn plural_template<'a>(
    forms: &'a Map<String, Value>,
    lang: &str,
    args: Option<&Args>,
) -> Option<&'a str> {
    let count = args
        .and_then(|args| args.get("count"))
        .and_then(|raw| raw.parse::<f64>().ok());
    let chosen = count.and_then(|count| forms.get(&plural_category(lang, count)));
    chosen
        .or_else(|| forms.get("_"))
        .and_then(Value::as_str)
}

/// Replace `{name}` and `{{name}}` placeholders.
fn interpolate(template: &str, args: Option<&Args>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
            .replace(&format!("{{{name}}}"), value)
    })
}

fn render_value(value: &Value, lang: &str, args: Option<&Args>) -> Option<String> {
    let template = match value {
        Value::String(text) => text.as_str(),
        Value::Object(forms) => plural_template(forms, lang, args)?,
        _ => return None,
    };
    Some(interpolate(template, args))
}

fn resolve(key: &str, args: Option<&Args>) -> Option<String> {
    with_bundle(|bundle| {
        [&bundle.translations, &bundle.fallback]
            .into_iter()
            .find_map(|root| lookup(root, key).and_then(|v| render_value(v, &bundle.lang, args)))
    })
}

/// Translate a key to the current language, falling back to English and
/// then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&Args>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Translate a pluralized key, substituting `{count}`.
#[must_use]
pub fn tr_count(key: &str, count: usize) -> String {
    let count = count.to_string();
    let args = Args::from([("count", count.as_str())]);
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn plural_forms_follow_the_count() {
        let value = forms(r#"{"one":"one tonne","other":"{count} tonnes"}"#);
        let one = Args::from([("count", "1")]);
        let many = Args::from([("count", "3")]);
        assert_eq!(render_value(&value, "en", Some(&one)).unwrap(), "one tonne");
        assert_eq!(render_value(&value, "en", Some(&many)).unwrap(), "3 tonnes");
    }

    #[test]
    fn catch_all_form_covers_missing_counts() {
        let value = forms(r#"{"one":"{count} item","_":"some items"}"#);
        let zero = Args::from([("count", "0")]);
        assert_eq!(render_value(&value, "en", Some(&zero)).unwrap(), "some items");
        assert_eq!(render_value(&value, "en", None).unwrap(), "some items");
        assert!(render_value(&forms(r#"{"one":"x"}"#), "en", None).is_none());
    }

    #[test]
    fn bundled_plurals_resolve() {
        crate::i18n::set_lang("en");
        assert_eq!(tr_count("marketplace.showing", 1), "Showing 1 project");
        assert_eq!(tr_count("marketplace.showing", 5), "Showing 5 projects");
        assert_eq!(tr_count("marketplace.in_cart", 0), "0 items in cart");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let args = Args::from([("name", "Amara")]);
        let resolved = render_value(&value, "en", Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Amara! Amara!");
    }

    #[test]
    fn dotted_keys_stop_at_missing_segments() {
        let root = forms(r#"{"cart":{"title":"Your Carbon Cart"}}"#);
        assert_eq!(lookup(&root, "cart.title"), Some(&Value::String("Your Carbon Cart".into())));
        assert!(lookup(&root, "cart.title.extra").is_none());
        assert!(lookup(&root, "nav").is_none());
    }
}

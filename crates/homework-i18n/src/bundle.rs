//! FluentBundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Bundles for every supported locale, built on first use from the embedded
/// resources.
static BUNDLES: Lazy<HashMap<Locale, I18nResult<FluentBundle<FluentResource>>>> = Lazy::new(|| {
    Locale::all()
        .into_iter()
        .map(|locale| (locale, build_bundle(locale)))
        .collect()
});

fn build_bundle(locale: Locale) -> I18nResult<FluentBundle<FluentResource>> {
    let lang_id = locale.to_language_identifier()?;

    let resource = FluentResource::try_new(locale.resource().to_string()).map_err(|(_, errors)| {
        I18nError::FluentParseError {
            locale: locale.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        }
    })?;

    let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
    // Unicode isolation marks would leak into chat messages.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::FluentParseError {
            locale: locale.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        })?;

    debug!("Built message bundle for locale: {}", locale);
    Ok(bundle)
}

/// Message accessor for the embedded catalogue.
pub struct Messages;

impl Messages {
    /// Formats a message, reporting any lookup or formatting failure.
    pub fn format(locale: Locale, key: &str, args: &[(&str, &str)]) -> I18nResult<String> {
        let bundle = match BUNDLES.get(&locale) {
            Some(Ok(bundle)) => bundle,
            Some(Err(e)) => {
                return Err(I18nError::FluentParseError {
                    locale: locale.code().to_string(),
                    errors: vec![e.to_string()],
                })
            }
            None => {
                return Err(I18nError::MessageNotFound {
                    key: key.to_string(),
                })
            }
        };

        let not_found = || I18nError::MessageNotFound {
            key: key.to_string(),
        };
        let message = bundle.get_message(key).ok_or_else(not_found)?;
        let pattern = message.value().ok_or_else(not_found)?;

        let fluent_args = (!args.is_empty()).then(|| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);

        if !errors.is_empty() {
            return Err(I18nError::MessageFormatError {
                key: key.to_string(),
                errors: errors.iter().map(|e| format!("{e:?}")).collect(),
            });
        }

        Ok(formatted.into_owned())
    }

    /// Gets a localized message, falling back to the message key on failure.
    pub fn get(locale: Locale, key: &str) -> String {
        Self::get_with_args(locale, key, &[])
    }

    /// Gets a localized message with arguments, falling back to the message key
    /// on failure.
    pub fn get_with_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        Self::format(locale, key, args).unwrap_or_else(|e| {
            warn!("Failed to resolve message '{}' for {}: {}", key, locale, e);
            key.to_string()
        })
    }

    /// Whether the catalogue for `locale` defines `key`.
    pub fn has_message(locale: Locale, key: &str) -> bool {
        matches!(BUNDLES.get(&locale), Some(Ok(bundle)) if bundle.has_message(key))
    }
}

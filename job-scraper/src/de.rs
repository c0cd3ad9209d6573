use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Either the expected value or anything else the site happened to send.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Deserialize an optional field, mapping `null` and values of the wrong
/// shape to `None` instead of failing the whole response.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Lenient<T>>::deserialize(deserializer)?;
    Ok(match value {
        Some(Lenient::Value(value)) => Some(value),
        Some(Lenient::Other(_)) | None => None,
    })
}

/// Like [`lenient`], falling back to the type's default.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Payment {
        #[serde(default, deserialize_with = "lenient")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_or_default")]
        currency: String,
    }

    fn payment(value: serde_json::Value) -> Payment {
        serde_json::from_value(value).expect("payment should always deserialize")
    }

    #[test]
    fn test_well_formed_values_are_kept() {
        let res = payment(json!({"amount": 120000, "currency": "rub"}));
        assert_eq!(res.amount, Some(120000.0));
        assert_eq!(res.currency, "rub");
        assert_eq!(payment(json!({"amount": 99.5})).amount, Some(99.5));
    }

    #[test]
    fn test_malformed_values_become_absent() {
        let res = payment(json!({"amount": "negotiable", "currency": null}));
        assert_eq!(
            res,
            Payment {
                amount: None,
                currency: String::new()
            }
        );
        let res = payment(json!({"amount": {"min": 1}, "currency": 643}));
        assert_eq!(res.amount, None);
        assert_eq!(res.currency, "");
        assert_eq!(payment(json!({})).amount, None);
    }
}

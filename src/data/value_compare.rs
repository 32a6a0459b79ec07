use crate::data::record::DataValue;
use std::cmp::Ordering;

/// Base letter of a Latin-1 accented letter, e.g. 'é' -> 'e'.
/// Letters outside Latin-1 are returned unchanged.
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Lowercased with Latin-1 accents removed
fn collation_key(s: &str) -> String {
    s.to_lowercase().chars().map(base_letter).collect()
}

/// Locale-style string ordering.
///
/// Compares accent- and case-insensitively first, then with accents but
/// ignoring case, then puts lower case ahead of upper case. Accent folding
/// covers Latin-1 only; other scripts compare by code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        // Same letters, different case: 'a' (0x61) must precede 'A' (0x41)
        .then_with(|| b.cmp(a))
}

/// NaN floats have no place in an ordering and sort with the nulls
fn is_unordered(value: &DataValue) -> bool {
    value.is_null() || matches!(value, DataValue::Float(f) if f.is_nan())
}

/// Compare two non-null values.
///
/// Numbers compare numerically (Integer and Float may be mixed); every other
/// pairing compares the display text of both sides.
pub fn compare_datavalues(a: &DataValue, b: &DataValue) -> Ordering {
    match (a, b) {
        (DataValue::Integer(a), DataValue::Integer(b)) => a.cmp(b),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            let (x, y) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (DataValue::String(a), DataValue::String(b))
        | (DataValue::DateTime(a), DataValue::DateTime(b)) => locale_compare(a, b),
        (a, b) => locale_compare(&a.to_string(), &b.to_string()),
    }
}

/// Sort comparison for a field that may be missing or null.
///
/// Missing, null and NaN values always land after present ones; `ascending`
/// only flips the comparison between two present values.
pub fn compare_for_sort(a: Option<&DataValue>, b: Option<&DataValue>, ascending: bool) -> Ordering {
    let a = a.filter(|v| !is_unordered(v));
    let b = b.filter(|v| !is_unordered(v));

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = compare_datavalues(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_comparison() {
        assert_eq!(
            compare_datavalues(&DataValue::Integer(1), &DataValue::Integer(2)),
            Ordering::Less
        );
        assert_eq!(
            compare_datavalues(&DataValue::Integer(2), &DataValue::Integer(2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_mixed_numeric_comparison() {
        assert_eq!(
            compare_datavalues(&DataValue::Integer(10), &DataValue::Float(9.5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_datavalues(&DataValue::Float(1.0), &DataValue::Integer(1)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numbers_as_text_compare_lexically() {
        // "10" vs "9" are strings here, so no numeric ordering
        assert_eq!(
            compare_datavalues(
                &DataValue::String("10".to_string()),
                &DataValue::String("9".to_string())
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "amy"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_accents() {
        assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("émile", "Emily"), Ordering::Less);
        // Unaccented form first when letters otherwise match
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("Ñandu", "nube"), Ordering::Less);
    }

    #[test]
    fn test_cross_type_falls_back_to_text() {
        assert_eq!(
            compare_datavalues(&DataValue::Integer(5), &DataValue::String("abc".to_string())),
            Ordering::Less
        );
        assert_eq!(
            compare_datavalues(&DataValue::Boolean(true), &DataValue::Boolean(false)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_nulls_last_both_directions() {
        let one = DataValue::Integer(1);
        let null = DataValue::Null;

        assert_eq!(compare_for_sort(Some(&null), Some(&one), true), Ordering::Greater);
        assert_eq!(compare_for_sort(Some(&null), Some(&one), false), Ordering::Greater);
        assert_eq!(compare_for_sort(None, Some(&one), false), Ordering::Greater);
        assert_eq!(compare_for_sort(Some(&one), None, true), Ordering::Less);
        assert_eq!(compare_for_sort(None, Some(&null), true), Ordering::Equal);
    }

    #[test]
    fn test_nan_sorts_with_nulls() {
        let nan = DataValue::Float(f64::NAN);
        let one = DataValue::Float(1.0);
        let three = DataValue::Float(3.0);

        assert_eq!(compare_for_sort(Some(&nan), Some(&one), true), Ordering::Greater);
        assert_eq!(compare_for_sort(Some(&nan), Some(&one), false), Ordering::Greater);
        assert_eq!(compare_for_sort(Some(&three), Some(&nan), true), Ordering::Less);
        assert_eq!(compare_for_sort(Some(&nan), None, true), Ordering::Equal);
    }

    #[test]
    fn test_infinite_floats_are_ordered() {
        let inf = DataValue::Float(f64::INFINITY);
        let neg = DataValue::Float(f64::NEG_INFINITY);
        assert_eq!(compare_datavalues(&inf, &DataValue::Integer(i64::MAX)), Ordering::Greater);
        assert_eq!(compare_datavalues(&neg, &DataValue::Float(-1e300)), Ordering::Less);
    }

    #[test]
    fn test_direction_applies_to_present_values() {
        let a = DataValue::Integer(1);
        let b = DataValue::Integer(2);
        assert_eq!(compare_for_sort(Some(&a), Some(&b), true), Ordering::Less);
        assert_eq!(compare_for_sort(Some(&a), Some(&b), false), Ordering::Greater);
    }
}

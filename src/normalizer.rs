// Turns captured label numbers into a canonical unit price
use crate::model::{Extraction, MalformedReason, UnitKind};

const SMALL_UNITS_PER_LARGE: f64 = 1000.0;

pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

/// Rounds the shortest decimal form of `value` to cents, half-up, so 1.005 gives 1.01.
/// `None` when the value in cents is not finite.
pub fn round2(value: f64) -> Option<f64> {
    if !(value * 100.0).is_finite() {
        return None;
    }

    let text = value.abs().to_string();
    let Some((whole, frac)) = text.split_once('.') else {
        return Some(value);
    };
    if frac.len() <= 2 {
        return Some(value);
    }

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().take(2))
        .map(|b| b - b'0')
        .collect();
    if frac.as_bytes()[2] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let (int_digits, cent_digits) = digits.split_at(digits.len() - 2);
    let to_str = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let rounded = format!("{}.{}", to_str(int_digits), to_str(cent_digits));
    rounded.parse::<f64>().ok().map(|v| v.copysign(value))
}

pub fn canonicalize(kind: UnitKind, raw_price: &str, raw_quantity: Option<&str>) -> Extraction {
    let malformed = |reason| Extraction::Malformed { kind, reason };

    let Some(price) = parse_decimal(raw_price) else {
        return malformed(MalformedReason::UnparsablePrice);
    };

    let value = if kind.has_quantity() {
        let Some(raw_quantity) = raw_quantity else {
            return malformed(MalformedReason::MissingQuantity);
        };
        let quantity = match raw_quantity.parse::<u32>() {
            Ok(0) => return malformed(MalformedReason::ZeroQuantity),
            Ok(q) => q,
            Err(_) => return malformed(MalformedReason::QuantityOutOfRange),
        };
        price * SMALL_UNITS_PER_LARGE / f64::from(quantity)
    } else {
        price
    };

    let Some(value) = round2(value) else {
        return malformed(MalformedReason::NonFiniteValue);
    };

    Extraction::Matched {
        kind,
        unit: kind.canonical_unit(),
        value,
    }
}

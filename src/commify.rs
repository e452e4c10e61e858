// Copyright 2024 Wadmath Developers.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Thousands grouping for decimal strings.

/// Inserts `,` separators every three digits in the integer part of a
/// decimal string, keeping a leading sign and leaving the fractional
/// part untouched.
///
/// Existing separators are canonicalized, so grouping is idempotent.
///
/// ```
/// use wadmath::commify;
///
/// assert_eq!(commify("1000"), "1,000");
/// assert_eq!(commify("-1234567.89"), "-1,234,567.89");
/// ```
pub fn commify(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", text),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let digits: Vec<u8> = int_part.bytes().filter(|&b| b != b',').collect();

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, &digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit as char);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commify() {
        assert_eq!(commify("1"), "1");
        assert_eq!(commify("123"), "123");
        assert_eq!(commify("1000"), "1,000");
        assert_eq!(commify("1000000"), "1,000,000");
        assert_eq!(commify("1120121.5687"), "1,120,121.5687");
        assert_eq!(commify("-1234567"), "-1,234,567");
        assert_eq!(commify("-1234567.89"), "-1,234,567.89");
        assert_eq!(commify("0.123456"), "0.123456");
    }

    #[test]
    fn test_commify_idempotent() {
        let texts = ["1", "1000", "1120121.5687", "-1234567.89", "0.5"];
        for text in &texts {
            let grouped = commify(text);
            assert_eq!(commify(&grouped), grouped);
        }
    }
}

use crate::input::round_to;

//formats an amount as dollars with thousands separators
//format_money(-1234.5, 2) == "-$1,234.50"
pub fn format_money(value: f64, decimals: usize) -> String {
    let rounded = round_to(value.abs(), decimals as i32);
    let text = format!("{:.*}", decimals, rounded);

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

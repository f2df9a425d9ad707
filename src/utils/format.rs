/// Precio en rupias con separadores indios: 123456 -> "₹1,23,456"
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_indian_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(950), "₹950");
        assert_eq!(format_inr(3500), "₹3,500");
        assert_eq!(format_inr(123456), "₹1,23,456");
        assert_eq!(format_inr(12345678), "₹1,23,45,678");
    }
}

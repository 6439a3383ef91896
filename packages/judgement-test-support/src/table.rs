//! Player-name fixtures.

/// `n` distinct seat names: "P0", "P1", ...
pub fn seat_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

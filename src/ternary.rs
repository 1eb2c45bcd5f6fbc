/// A ternary expression macro.  Rust's `if` is already an expression,
/// but `cargo fmt` insists on spreading it over five lines, and the
/// border-clamping tables in the energy and removal code are far easier
/// to compare side by side when each case fits on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn picks_the_right_arm() {
        assert_eq!(cq!(1 < 2, "yes", "no"), "yes");
        assert_eq!(cq!(1 > 2, "yes", "no"), "no");
        let x = 3u32;
        assert_eq!(cq!(x == 0, x, x - 1), 2);
    }
}

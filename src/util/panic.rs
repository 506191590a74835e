/// Runs `$run` and asserts that it panics. The `contains` form additionally checks the panic
/// message, which is how the typed errors thrown by collections are verified.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, contains $needle:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .expect_err("assertion failed to panic");
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($needle),
            "panic message {message:?} should mention {:?}",
            $needle
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

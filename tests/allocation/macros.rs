pub mod function_name_macro {
    /// Macro that extracts the name of the test function it's called from.
    /// Usage: `let name = function_name!();`
    ///
    /// Walks the backtrace until it hits a frame inside one of this target's
    /// test modules. Requires debug symbols (the `cargo test` default).
    #[macro_export]
    macro_rules! function_name {
        () => {{
            let mut function_name = None;

            backtrace::trace(|frame| {
                backtrace::resolve(frame.ip(), |symbol| {
                    if function_name.is_none() {
                        if let Some(name) = symbol.name() {
                            let name_str = name.to_string();

                            let in_test_module = (name_str.contains("candidate_allocation::")
                                || name_str.contains("pool_loading::")
                                || name_str.contains("company_fixtures::"))
                                && !name_str.contains("{{closure}}")
                                && !name_str.contains("helpers::");

                            if in_test_module {
                                // Mangled names carry a trailing hash segment,
                                // e.g. "allocation::pool_loading::some_test::h87ccb05bfd20b6d2";
                                // the test function is the segment before it.
                                let parts: Vec<&str> = name_str.split("::").collect();
                                let candidate = match parts.as_slice() {
                                    [.., name, hash] if hash.starts_with('h') && hash.len() > 10 => {
                                        Some(*name)
                                    }
                                    [.., name] => Some(*name),
                                    [] => None,
                                };

                                if let Some(func_name) =
                                    candidate.filter(|s| !s.is_empty() && !s.starts_with('<'))
                                {
                                    function_name = Some(func_name.to_string());
                                }
                            }
                        }
                    }
                });
                function_name.is_none() // Continue until we find a function name
            });

            function_name.expect(
                "Failed to extract the test function name from the backtrace. \
                 Make sure the binary is compiled with debug symbols.",
            )
        }};
    }

    pub use function_name;
}

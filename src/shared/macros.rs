/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a `Result` during startup, logging the error and exiting with status 1 on failure.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}

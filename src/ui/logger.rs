use crate::traits::Logger;

/// Logger writing through the terminal `ui` helpers
#[derive(Debug, Default, Clone, Copy)]
pub struct UiLogger;

impl Logger for UiLogger {
    fn debug(&self, msg: &str) {
        super::debug(msg);
    }

    fn info(&self, msg: &str) {
        super::info(msg);
    }

    fn warning(&self, msg: &str) {
        super::warning(msg);
    }

    fn error(&self, msg: &str) {
        super::error(msg);
    }
}

use gloo::console;

/// Component-tagged console logging. A static site has nowhere to ship logs,
/// so everything lands in the browser console.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tagged(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tagged(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tagged(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tagged(component, message));
    }

    fn tagged(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_carry_the_component() {
        assert_eq!(Logger::tagged("nav-menu", "bound"), "[nav-menu] bound");
    }
}

//! The trait that decouples mons from any specific display tool.
//!
//! Matching and layout synthesis are pure functions over output names and
//! argument lists.  Only a [`DisplayServer`] touches the outside world, so
//! the rest of the crate can be exercised against a test double.

/// Abstraction over the display subsystem.
///
/// An implementation might shell out to `xrandr`, or it might be a stub that
/// records calls in tests.
pub trait DisplayServer {
    /// The error type produced by this backend.
    type Error: std::error::Error + Send + 'static;

    /// Outputs with a display physically attached, whether or not they are
    /// currently enabled.
    fn connected_outputs(&self) -> Result<Vec<String>, Self::Error>;

    /// Outputs currently driving a display.
    fn active_outputs(&self) -> Result<Vec<String>, Self::Error>;

    /// Apply a layout in one invocation.
    ///
    /// `args` is the full directive list produced by
    /// [`layout::build_args`](crate::layout::build_args); the backend must
    /// pass it through in order.
    fn apply(&self, args: &[String]) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording [`DisplayServer`] shared by the unit tests.

    use super::DisplayServer;
    use std::cell::RefCell;

    /// A test double that reports fixed output lists and records every
    /// `apply` call.
    #[derive(Debug, Default)]
    pub struct MockDisplay {
        pub connected: Vec<String>,
        pub active: Vec<String>,
        pub fail: bool,
        pub calls: RefCell<Vec<&'static str>>,
        pub applied: RefCell<Vec<Vec<String>>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock display failure")]
    pub struct MockError;

    impl MockDisplay {
        pub fn new(connected: &[&str], active: &[&str]) -> Self {
            Self {
                connected: connected.iter().map(|s| s.to_string()).collect(),
                active: active.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl DisplayServer for MockDisplay {
        type Error = MockError;

        fn connected_outputs(&self) -> Result<Vec<String>, MockError> {
            self.calls.borrow_mut().push("connected");
            if self.fail {
                return Err(MockError);
            }
            Ok(self.connected.clone())
        }

        fn active_outputs(&self) -> Result<Vec<String>, MockError> {
            self.calls.borrow_mut().push("active");
            if self.fail {
                return Err(MockError);
            }
            Ok(self.active.clone())
        }

        fn apply(&self, args: &[String]) -> Result<(), MockError> {
            self.calls.borrow_mut().push("apply");
            if self.fail {
                return Err(MockError);
            }
            self.applied.borrow_mut().push(args.to_vec());
            Ok(())
        }
    }

    #[test]
    fn mock_records_calls() {
        let display = MockDisplay::new(&["eDP-1"], &[]);
        assert_eq!(display.connected_outputs().unwrap(), ["eDP-1"]);
        display.apply(&["--output".into(), "eDP-1".into()]).unwrap();
        assert_eq!(*display.calls.borrow(), ["connected", "apply"]);
        assert_eq!(display.applied.borrow().len(), 1);
    }
}

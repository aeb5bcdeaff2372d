// tests that Clone, Debug, PartialEq, and Display are implemented for a
// distribution
#[macro_export]
macro_rules! test_basic_impls {
    ($fx: expr) => {
        #[test]
        fn should_impl_debug_clone_and_partialeq() {
            assert_eq!($fx, $fx.clone());
            let _s1 = format!("{:?}", $fx);
        }

        #[test]
        fn should_impl_display() {
            let s = format!("{}", $fx);
            assert!(!s.is_empty());
        }
    };
}

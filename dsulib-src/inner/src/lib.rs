#[macro_export]
macro_rules! reexport_members {
    ( $($member:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $member::{self, *};
    )* };
}

pub mod picker;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod service;
        pub mod store;

        pub use service::*;
    }
}

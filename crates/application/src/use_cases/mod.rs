pub mod lookup;

pub use lookup::{IterativeLookupUseCase, RecursiveLookupReport, RecursiveLookupUseCase, WalkOptions};

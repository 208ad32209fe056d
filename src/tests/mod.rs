mod building_tests;
pub(crate) mod utils;

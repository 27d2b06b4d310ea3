// Property-based tests
// Random grids and random gesture sequences

mod grid_properties;
mod placement_properties;

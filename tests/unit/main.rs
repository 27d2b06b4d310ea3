// Parameterised unit tests against the public API

mod models;

//! Runtime services for the command-line front end

pub mod logging;

mod bounds;
mod config_loading;
mod model;

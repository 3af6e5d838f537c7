mod properties;
mod lifecycle;

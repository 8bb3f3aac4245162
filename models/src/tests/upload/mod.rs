mod builder;
mod policy;

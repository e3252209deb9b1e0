mod arg_parsing;
mod list;
mod render;
mod util;
mod version;

/// Entity ids are auto-incrementing integers, unique per entity kind for the
/// lifetime of the process.
pub type DbId = i64;

pub const SITE_NAME: &str = "CodeArena";

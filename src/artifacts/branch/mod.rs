pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name of the remote created by a default clone
pub const REMOTE_NAME: &str = "origin";

pub const LOCAL_REF_PREFIX: &str = "refs/heads/";

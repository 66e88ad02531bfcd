/// Permission level assigned to every self-registered user
pub const DEFAULT_PERMISSION_LEVEL: i32 = 1;

/// Number of random bytes in a password salt
pub const PASSWORD_SALT_LEN: usize = 16;

/// Separator between the salt and the digest in a stored password
pub const PASSWORD_SEPARATOR: char = '$';

//! File mode classification and `ls -l` style permission strings

pub const MODE_FILETYPE_MASK: u32 = 0o170_000;
pub const FILETYPE_SOCKET: u32 = 0o140_000;
pub const FILETYPE_SYMLINK: u32 = 0o120_000;
pub const FILETYPE_REGULAR_FILE: u32 = 0o100_000;
pub const FILETYPE_BLOCK_DEVICE: u32 = 0o060_000;
pub const FILETYPE_DIRECTORY: u32 = 0o040_000;
pub const FILETYPE_CHARACTER_DEVICE: u32 = 0o020_000;
pub const FILETYPE_FIFO: u32 = 0o010_000;

pub const SET_UID: u32 = 0o4000;
pub const SET_GID: u32 = 0o2000;
pub const STICKY: u32 = 0o1000;

/// Read, write and execute bits for owner, group and other, in display order.
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Type of a filesystem entry as encoded in its mode bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
    /// Regular files and any type pattern that is not recognized
    Other,
}

impl FileKind {
    /// Classifies a mode. Checks run in a fixed order, directory first.
    pub fn from_mode(mode: u32) -> Self {
        let file_type = mode & MODE_FILETYPE_MASK;
        if file_type == FILETYPE_DIRECTORY {
            FileKind::Directory
        } else if file_type == FILETYPE_SYMLINK {
            FileKind::Symlink
        } else if file_type == FILETYPE_CHARACTER_DEVICE {
            FileKind::CharDevice
        } else if file_type == FILETYPE_BLOCK_DEVICE {
            FileKind::BlockDevice
        } else if file_type == FILETYPE_FIFO {
            FileKind::Fifo
        } else if file_type == FILETYPE_SOCKET {
            FileKind::Socket
        } else {
            FileKind::Other
        }
    }

    pub fn glyph(self) -> char {
        match self {
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::CharDevice => 'c',
            FileKind::BlockDevice => 'b',
            FileKind::Fifo => 'p',
            FileKind::Socket => 's',
            FileKind::Other => '-',
        }
    }
}

/// Renders a mode as the 10-character type-and-permissions column,
/// e.g. `drwxr-xr-x` or `-rwsr-xr-T`.
///
/// Every `u32` is accepted; bits outside the type, permission and special
/// ranges are ignored.
pub fn format_permissions(mode: u32) -> String {
    let mut chars = ['-'; 10];
    chars[0] = FileKind::from_mode(mode).glyph();

    for (slot, (bit, letter)) in chars[1..].iter_mut().zip(PERMISSION_BITS) {
        if mode & bit != 0 {
            *slot = letter;
        }
    }

    // Special bits override the execute column of their triad
    if mode & SET_UID != 0 {
        chars[3] = if mode & 0o100 != 0 { 's' } else { 'S' };
    }
    if mode & SET_GID != 0 {
        chars[6] = if mode & 0o010 != 0 { 's' } else { 'S' };
    }
    if mode & STICKY != 0 {
        chars[9] = if mode & 0o001 != 0 { 't' } else { 'T' };
    }

    chars.iter().collect()
}

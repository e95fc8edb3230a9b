//! The fixed deny-rule tables.
//!
//! Each table is an ordered list evaluated first-match-wins, kept as
//! data so the full rule set can be audited and unit-tested in one
//! place. Matching is literal regex matching over the raw command or
//! path string. It can over-block commands that merely contain a
//! matched substring and under-block equivalent commands phrased to
//! avoid the patterns. That makes this an advisory layer, not a
//! security boundary.

/// One deny rule: if `pattern` matches, the tool call is denied with
/// `reason`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// Deny rules applied to shell commands (the `Bash` tool), in order.
pub const COMMAND_RULES: &[Rule] = &[
    Rule {
        name: "rm-root-recursive",
        pattern: r"rm\s+-(?:[A-Za-z]*r[A-Za-z]*f|[A-Za-z]*f[A-Za-z]*r)[A-Za-z]*\s+/\*?\s*$",
        reason: "recursive force-delete of the filesystem root",
    },
    Rule {
        name: "rm-no-preserve-root",
        pattern: r"rm\s.*--no-preserve-root",
        reason: "recursive force-delete of the filesystem root",
    },
    Rule {
        name: "mkfs",
        pattern: r"\bmkfs(?:\.[a-z0-9]+)?\b",
        reason: "filesystem formatting",
    },
    Rule {
        name: "dd-block-device",
        pattern: r"\bdd\b[^|;]*\bof=/dev/",
        reason: "raw write to a block device",
    },
    Rule {
        name: "redirect-block-device",
        pattern: r">\s*/dev/(?:sd|nvme|hd)[a-z0-9]*",
        reason: "raw write to a block device",
    },
    Rule {
        name: "chmod-root",
        pattern: r"chmod\s+(?:-[A-Za-z]+\s+)*777\s+/\s*$",
        reason: "world-writable permissions on the filesystem root",
    },
    Rule {
        name: "dotenv-read",
        pattern: r"\b(?:cat|less|more|head|tail|strings|grep)\b[^|;]*\.env\b",
        reason: "secrets exposure: reading a dotenv file",
    },
    Rule {
        name: "secret-var-print",
        pattern: r"\b(?:echo|printenv)\b.*(?:TOKEN|KEY|SECRET)",
        reason: "secrets exposure: printing a credential variable",
    },
];

/// Deny rules applied to write/edit target paths, in order.
pub const PATH_RULES: &[Rule] = &[
    Rule {
        name: "system-credential-file",
        pattern: r"^/etc/(?:passwd|shadow|sudoers)",
        reason: "write to a system credential file",
    },
    Rule {
        name: "ssh-config",
        pattern: r"(?:^|/)\.ssh(?:/|$)",
        reason: "write inside the SSH configuration directory",
    },
    Rule {
        name: "dotenv-file",
        pattern: r"(?:^|/)\.env(?:\.[A-Za-z0-9._-]+)?$",
        reason: "secrets exposure: writing a dotenv file",
    },
    Rule {
        name: "credential-store",
        pattern: r"(?:credentials|secrets)\.json$",
        reason: "write to a credential store file",
    },
];

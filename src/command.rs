//! Run-command derivation.
//!
//! Maps a committed cluster identifier to the command template the editor
//! appends to its buffer.

/// Placeholder for the script path. Substituted by the editor when a
/// script is configured, never by the selectors.
pub const FILE_PLACEHOLDER: &str = "%file";

/// Derive the run command for a cluster identifier.
///
/// Cluster "1" runs on gpu, "2" on cpu, anything else falls back to plain
/// python. Pure function of the identifier.
pub fn derive_run_command(cluster_id: &str) -> String {
    let command = match cluster_id {
        "1" => "gpu %file",
        "2" => "cpu %file",
        _ => "python %file",
    };
    command.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_a_pure_three_way_policy() {
        assert_eq!(derive_run_command("1"), "gpu %file");
        assert_eq!(derive_run_command("2"), "cpu %file");
        assert_eq!(derive_run_command("3"), "python %file");
        assert_eq!(derive_run_command("local"), "python %file");
        assert_eq!(derive_run_command("no-cluster"), "python %file");
        assert_eq!(derive_run_command(""), "python %file");
    }

    #[test]
    fn test_derive_is_stable_on_repeat() {
        assert_eq!(derive_run_command("1"), derive_run_command("1"));
    }
}

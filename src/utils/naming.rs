//! Naming of the generated topology.

/// Suffix appended to the topology name to build the output file name
pub const OUTPUT_SUFFIX: &str = "_mininet.py";

/// Derive the topology name from the input path.
///
/// Takes the part before the first space, then the part before the first
/// dot, then drops any leading directories. Returns `None` if nothing is
/// left.
///
/// # Examples
/// ```
/// use automininet::utils::naming::topology_name;
///
/// assert_eq!(topology_name("zoo/Abilene.graphml").as_deref(), Some("Abilene"));
/// assert_eq!(topology_name("Geant2012.graphml").as_deref(), Some("Geant2012"));
/// assert_eq!(topology_name("./Abilene.graphml"), None);
/// ```
pub fn topology_name(input: &str) -> Option<String> {
    let before_space = input.split(' ').next().unwrap_or_default();
    let before_dot = before_space.split('.').next().unwrap_or_default();
    let name = before_dot.rsplit('/').next().unwrap_or_default();
    (!name.is_empty()).then(|| name.to_string())
}

/// File name of the generated script for topology `name`
pub fn output_file_name(name: &str) -> String {
    format!("{}{}", name, OUTPUT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_name() {
        assert_eq!(topology_name("Abilene.graphml").as_deref(), Some("Abilene"));
        assert_eq!(topology_name("/data/zoo/Bellcanada.graphml").as_deref(), Some("Bellcanada"));
        assert_eq!(topology_name("Abilene").as_deref(), Some("Abilene"));
    }

    #[test]
    fn test_topology_name_cuts_at_space_before_dot() {
        assert_eq!(topology_name("zoo/My Topology.graphml").as_deref(), Some("My"));
        assert_eq!(topology_name("zoo/Abilene.v2 copy.graphml").as_deref(), Some("Abilene"));
    }

    #[test]
    fn test_topology_name_empty() {
        assert_eq!(topology_name(""), None);
        assert_eq!(topology_name(".graphml"), None);
        assert_eq!(topology_name("zoo/"), None);
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("Abilene"), "Abilene_mininet.py");
    }
}

use crate::types::{Coordinates, ZoneCluster};

/// Cluster label for stops without a zone name
pub const UNKNOWN_ZONE_LABEL: &str = "(unknown)";

/// Hospital hub all routes are anchored on
pub const DEFAULT_HUB: Coordinates = Coordinates::new(50.4195, -4.1090);

/// Zone groups used when no cluster file is configured
pub fn builtin_zone_clusters() -> Vec<ZoneCluster> {
    vec![
        ZoneCluster::new(
            "Mutley / Greenbank / Lipson / St Judes / Mount Gould",
            &["Mutley", "Greenbank", "Lipson", "St Judes", "Mount Gould"],
        ),
        ZoneCluster::new(
            "Peverell / Hartley / Mannamead",
            &["Peverell", "Hartley", "Mannamead", "Compton"],
        ),
        ZoneCluster::new(
            "City Centre / Stonehouse / Millbay / Barbican",
            &["City Centre", "Stonehouse", "Millbay", "Barbican", "The Hoe"],
        ),
        ZoneCluster::new(
            "Crownhill / Derriford / Estover / Leigham",
            &["Crownhill", "Derriford", "Estover", "Leigham", "Glenholt"],
        ),
        ZoneCluster::new(
            "Plympton / Colebrook / Chaddlewood",
            &["Plympton", "Colebrook", "Chaddlewood", "Woodford"],
        ),
        ZoneCluster::new(
            "Plymstock / Elburton / Hooe / Oreston",
            &["Plymstock", "Elburton", "Hooe", "Oreston", "Turnchapel"],
        ),
        ZoneCluster::new(
            "St Budeaux / Keyham / Ford",
            &["St Budeaux", "Keyham", "Ford", "Camels Head"],
        ),
    ]
}

use pepe_dna::config::{AppConfig, ConfigManager, ConfigSection, PreviewConfig};
use pepe_dna::engines::decoding::LocusEntry;
use pepe_dna::functions::registry::ExpressorRegistry;
use pepe_dna::PepeError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pepe_dna_{}_{}.toml", name, std::process::id()))
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("round_trip");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.generator.bits_per_set = 200;
            c.decoder.resolve_conflicts = false;
            c.decoder.loci = Some(vec![LocusEntry::new(0, 0, 10, "skin_color")]);
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.get(), manager.get());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_layered_load_from_file() {
    let path = temp_path("layered");
    std::fs::write(
        &path,
        r#"
[generator]
bits_per_set = 64

[[decoder.loci]]
chromosome = 1
start = 0
length = 8
expressor = "body_neck"
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_layered(Some(&path)).unwrap();
    let config = manager.get();
    assert_eq!(config.generator.bits_per_set, 64);
    assert!(config.decoder.resolve_conflicts);
    assert_eq!(
        config.decoder.loci,
        Some(vec![LocusEntry::new(1, 0, 8, "body_neck")])
    );

    let decoder = config.decoder.build(&ExpressorRegistry::new()).unwrap();
    assert_eq!(decoder.table().len(), 1);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_error() {
    let manager = ConfigManager::new();
    let err = manager.load_from_file(temp_path("does_not_exist")).unwrap_err();
    match err {
        PepeError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an io error, got {:?}", other),
    }
    assert!(manager.load_layered(Some(temp_path("does_not_exist"))).is_err());
}

#[test]
fn test_unknown_expressor_rejected() {
    let path = temp_path("unknown_expressor");
    std::fs::write(
        &path,
        "[[decoder.loci]]\nchromosome = 0\nstart = 0\nlength = 4\nexpressor = \"tail\"\n",
    )
    .unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(&path).is_err());
    assert_eq!(manager.get(), AppConfig::default());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_preview_base_validation() {
    let mut preview = PreviewConfig::default();
    assert!(preview.validate().is_ok());

    preview.base.head.mouth = "eyes>smug_eyes".to_string();
    assert!(preview.validate().is_err());

    preview.base.head.mouth = "mouth>smug_lips".to_string();
    preview.base.skin.color = "green".to_string();
    assert!(preview.validate().is_err());
}

#[test]
fn test_section_names() {
    assert_eq!(<pepe_dna::config::GeneratorConfig as ConfigSection>::section_name(), "generator");
    assert_eq!(<pepe_dna::config::DecoderConfig as ConfigSection>::section_name(), "decoder");
    assert_eq!(<PreviewConfig as ConfigSection>::section_name(), "preview");
}

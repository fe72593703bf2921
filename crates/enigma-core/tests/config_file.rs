use enigma_core::{Machine, MachineConfig, ReflectorChoice, Setting, WheelChoice};

const BARBAROSSA: &str = r#"
reflector = "B"
plugboard = ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"]

[[rotors]]
wheel = "II"
ring = 2
position = "B"

[[rotors]]
wheel = "IV"
ring = 21
position = "L"

[[rotors]]
wheel = "V"
ring = 12
position = "A"
"#;

const BARBAROSSA_CIPHER: &str = "EDPUDNRGYSZRCXNUYTPOMRMBOFKTBZREZKMLXLVEFGUEYSIOZVEQMIKUBPMMYLKLTTDEISMDICAGYKUACTCDOMOHWXMUUIAUBSTSLRNBZSZWNRFXWFYSSXJZVIJHIDISHPRKLKAYUPADTXQSPINQMATLPIFSVKDASCTACDPBOPVHJK";

#[test]
fn toml_machine_file_matches_builder() {
    let from_file: MachineConfig = toml::from_str(BARBAROSSA).unwrap();
    let from_builder = MachineConfig::new("II IV V", "B")
        .unwrap()
        .with_rings("02 21 12")
        .unwrap()
        .with_positions("BLA")
        .unwrap()
        .with_plugs("AV BS CG DL FU HZ IN KM OW RX")
        .unwrap();
    assert_eq!(from_file, from_builder);

    let mut m = Machine::build(&from_file).unwrap();
    let plain = m.process_str(BARBAROSSA_CIPHER).unwrap();
    assert!(plain.starts_with("AUFKLXABTEILUNGXVONXKURTINOWAX"));
}

#[test]
fn omitted_settings_default_to_first_symbol() {
    let cfg: MachineConfig = toml::from_str(
        r#"
reflector = "B"
rotors = [{ wheel = "I" }, { wheel = "II" }, { wheel = "III" }]
"#,
    )
    .unwrap();
    assert!(cfg.plugboard.is_empty());
    assert!(cfg.rotors.iter().all(|r| r.ring == Setting::Number(1)));
    let cipher = Machine::build(&cfg).unwrap().process_str("AAAAA").unwrap();
    assert_eq!(cipher, "BDZGO");
}

#[test]
fn custom_tables_and_alphabet() {
    let cfg: MachineConfig = toml::from_str(
        r#"
alphabet = "ABCDEF"
reflector = { name = "mini", wiring = "DEFABC" }

[[rotors]]
wheel = { name = "left", wiring = "CAFBED", notches = "F" }
position = "C"

[[rotors]]
wheel = { wiring = "BDFACE", notches = "B" }
ring = 6
"#,
    )
    .unwrap();

    assert_eq!(cfg.alphabet.as_deref(), Some("ABCDEF"));
    assert!(matches!(cfg.reflector, ReflectorChoice::Custom { .. }));
    assert_eq!(cfg.wheel_labels(), vec!["left", "custom"]);
    let WheelChoice::Custom { stationary, .. } = &cfg.rotors[1].wheel else {
        panic!("second wheel should be custom");
    };
    assert!(!stationary);

    let text = "FACADEBEADED";
    let cipher = Machine::build(&cfg).unwrap().process_str(text).unwrap();
    let plain = Machine::build(&cfg).unwrap().process_str(&cipher).unwrap();
    assert_eq!(plain, text);
}

#[test]
fn serialized_config_reads_back() {
    let cfg = MachineConfig::new("Beta II IV I", "B-Thin")
        .unwrap()
        .with_rings("A A A V")
        .unwrap()
        .with_positions("V J N A")
        .unwrap()
        .with_plugs("AT BL DF")
        .unwrap();
    let text = toml::to_string(&cfg).unwrap();
    let back: MachineConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn unknown_wheel_surfaces_at_build_time() {
    let cfg: MachineConfig = toml::from_str(
        r#"
reflector = "B"
rotors = [{ wheel = "IX" }]
"#,
    )
    .unwrap();
    assert!(Machine::build(&cfg).is_err());
}

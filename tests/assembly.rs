use pitch_stats::{
    assemble, run_batch, Category, ColumnKey, CsvDirSource, ExtractionRequest, MemorySource,
    RawStatTable, RowIndex, StatValue,
};

fn mbappe() -> RowIndex {
    RowIndex::new("Kylian Mbappé", "Real Madrid", "ESP-La Liga", "2024-25")
}

fn two_category_source() -> MemorySource {
    let standard = RawStatTable::new(vec![
        ColumnKey::pair("Standard", "Gls"),
        ColumnKey::pair("Standard", "Ast"),
    ])
    .with_row(mbappe(), vec![StatValue::Int(25), StatValue::Int(5)]);

    let shooting = RawStatTable::new(vec![ColumnKey::pair("Standard", "Sh")])
        .with_row(mbappe(), vec![StatValue::Int(120)]);

    MemorySource::new()
        .with_table(Category::Standard, standard)
        .with_table(Category::Shooting, shooting)
}

#[test]
fn assembles_record_from_two_categories() {
    let request = ExtractionRequest::new("Mbappé", "ESP-La Liga", "2024-25");
    let record = assemble(&two_category_source(), &request).expect("player should resolve");

    let fields: Vec<(&str, String)> = record.iter().map(|(k, v)| (k, v.to_string())).collect();
    assert_eq!(
        fields,
        vec![
            ("player_name", "Mbappé".to_string()),
            ("league", "ESP-La Liga".to_string()),
            ("season", "2024-25".to_string()),
            ("team", "Real Madrid".to_string()),
            ("goals", "25".to_string()),
            ("assists", "5".to_string()),
            ("shots", "120".to_string()),
        ]
    );
}

#[test]
fn passing_failure_does_not_lose_standard() {
    let source = two_category_source().with_failure(Category::Passing, "connection reset");
    let request = ExtractionRequest::new("Kylian Mbappé", "ESP-La Liga", "2024-25");

    let record = assemble(&source, &request).expect("standard still matches");
    assert_eq!(record.get("goals"), Some(&StatValue::Int(25)));
    assert_eq!(record.get("shots"), Some(&StatValue::Int(120)));
}

#[test]
fn batch_of_three_with_one_unknown() {
    let source = two_category_source();
    let requests = vec![
        ExtractionRequest::new("Mbappé", "ESP-La Liga", "2024-25"),
        ExtractionRequest::new("Erling Haaland", "ESP-La Liga", "2024-25"),
        ExtractionRequest::new("Kylian", "ESP-La Liga", "2024-25"),
    ];

    let result = run_batch(&source, &requests);
    assert_eq!(result.len(), 2);
    assert_eq!(result.records[0].player_name(), Some("Mbappé"));
    assert_eq!(result.records[1].player_name(), Some("Kylian"));
    assert_eq!(result.omitted[0].player_name, "Erling Haaland");
}

#[test]
fn csv_directory_source_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("standard.csv"),
        "league,season,team,player,nation,pos,Playing Time,Performance,Performance,Progression\n\
         ,,,,,,Min,Gls,Ast,PrgC\n\
         ESP-La Liga,2024-25,Real Madrid,Kylian Mbappé,fr FRA,FW,\"2,916\",31,3,92\n\
         ESP-La Liga,2024-25,Real Madrid,Jude Bellingham,eng ENG,MF,\"2,560\",9,8,61\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("possession.csv"),
        "league,season,team,player,Carries,Carries\n\
         ,,,,Carries,PrgC\n\
         ESP-La Liga,2024-25,Real Madrid,Kylian Mbappé,812,140\n",
    )
    .unwrap();

    let source = CsvDirSource::new(dir.path());
    let request = ExtractionRequest::new("Kylian Mbappé", "ESP-La Liga", "2024-25");
    let record = assemble(&source, &request).expect("player should resolve");

    assert_eq!(record.get("nationality"), Some(&StatValue::from("fr FRA")));
    assert_eq!(record.get("position"), Some(&StatValue::from("FW")));
    assert_eq!(record.get("minutes"), Some(&StatValue::Int(2916)));
    assert_eq!(record.get("goals"), Some(&StatValue::Int(31)));
    assert_eq!(record.get("carries"), Some(&StatValue::Int(812)));
    // standard's Progression_PrgC is seen before possession's Carries_PrgC
    assert_eq!(record.get("progressive_carries"), Some(&StatValue::Int(92)));
    assert_eq!(record.get_f64_or("expected_goals", 0.0), 0.0);
}

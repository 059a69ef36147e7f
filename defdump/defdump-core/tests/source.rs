use defdump_core::{ByteSource, MemoryByteSource, PartitionId, SourceError};

#[test]
fn memory_source_enumerates_ids_in_ascending_order() {
    let partition = PartitionId::archive(2, 1);
    let source = MemoryByteSource::new()
        .with_file(partition, 9, vec![0])
        .with_file(partition, 5, vec![1, 0]);

    assert_eq!(source.file_ids(partition).unwrap(), vec![5, 9]);
    assert_eq!(source.fetch(partition, 5).unwrap().unwrap().as_ref(), &[1, 0]);
    assert!(source.fetch(partition, 6).unwrap().is_none());
}

#[test]
fn unknown_partition_is_an_error() {
    let source = MemoryByteSource::new();
    assert!(matches!(
        source.file_ids(PartitionId::Index(8)),
        Err(SourceError::PartitionNotFound { .. })
    ));
}

#[test]
fn empty_partition_lists_no_ids() {
    let partition = PartitionId::archive(2, 4);
    let source = MemoryByteSource::new().with_partition(partition);
    assert!(source.file_ids(partition).unwrap().is_empty());
}

/// Round trips `$obj` through arkworks canonical serialization (compressed and uncompressed), JSON
/// and MessagePack, checking the result equals `$obj` each time. The caller needs `serde_json` and
/// `rmp_serde` as dev-dependencies and the arkworks serialization traits in scope.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr, $Instant: ident) => {
        let start = $Instant::now();
        $crate::test_serialization!($obj_type, $obj);
        println!("Serialization round trips took {:?}", start.elapsed());
    };
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        assert_eq!(serz.len(), CanonicalSerialize::compressed_size(&$obj));
        let deserz: $obj_type = CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        CanonicalSerialize::serialize_uncompressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type = CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        let ser = rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}

/// Round trips `$obj` through JSON and MessagePack only, for types without canonical serialization
#[macro_export]
macro_rules! test_serde {
    ($obj_type:ty, $obj: expr) => {
        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        let ser = rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}

use aodh_core::{ConfigRequest, OutputFormat, render};
use aodh_meta::ParameterSet;
use aodh_test_utils::supported_os;
use proptest::prelude::*;

fn any_os() -> impl Strategy<Value = usize> {
    0..supported_os().len()
}

proptest! {
    #[test]
    fn explicit_integers_pass_through_unchanged(os in any_os(), n in 0i64..100_000) {
        let raw = n.to_string();
        let params = ParameterSet::new().with("database_max_retries", raw.as_str());
        let request = ConfigRequest::new(supported_os()[os].facts()).with_db(params);

        let catalog = render(&request).unwrap();
        let db = catalog.oslo_db("aodh_config").unwrap();
        prop_assert_eq!(db.max_retries.to_string(), raw);
        // Every other knob is untouched
        prop_assert!(db.retry_interval.is_service_default());
        prop_assert!(db.pool_timeout.is_service_default());
    }

    #[test]
    fn rendering_is_idempotent(
        os in any_os(),
        port in 1i64..=65535,
        workers in 1i64..64,
        ssl in any::<bool>(),
        servername in "[a-z]{1,12}(\\.[a-z]{2,6}){1,2}",
    ) {
        let wsgi = ParameterSet::new()
            .with("port", port)
            .with("workers", workers)
            .with("ssl", ssl)
            .with("servername", servername.as_str());
        let request = ConfigRequest::new(supported_os()[os].facts())
            .with_db(ParameterSet::new())
            .with_wsgi(wsgi);

        let first = render(&request).unwrap();
        let second = render(&request).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.render(OutputFormat::Json).unwrap(),
            second.render(OutputFormat::Json).unwrap()
        );
        prop_assert_eq!(first.contains_class("apache::mod::ssl"), ssl);
    }
}

//! End-to-end tests for the decode → translate pipeline.

use rpc_config_bridge::{
    decode, decode_json_only, translate_consul_client, translate_etcd_client, translate_server,
    ActiveOptions, ClientOption, ConfigError, ConfigFormat, ConsulClientConfig,
    ConsulServerConfig, EtcdClientConfig, ServerOption,
};

const CLIENT_JSON: &[u8] = br#"{
    "ClientBasicInfo": {
        "ServiceName": "echo-client",
        "Method": "echo",
        "Tags": {"idc": "east", "tier": "1"}
    },
    "HostPorts": ["127.0.0.1:8888", "127.0.0.1:8889"],
    "DestService": "echo-server",
    "Protocol": "grpc",
    "Connection": {
        "Method": "LongConnection",
        "LongConnection": {
            "MinIdlePerAddress": 1,
            "MaxIdlePerAddress": 4,
            "MaxIdleGlobal": 32,
            "MaxIdleTimeout": "30s"
        },
        "MuxConnection": {"ConnNum": 6}
    },
    "FailureRetry": {
        "StopPolicy": {
            "MaxRetryTimes": 3,
            "MaxDurationMS": 2000,
            "DisableChainStop": false,
            "DDLStop": true,
            "CBPolicy": {"ErrorRate": 0.1}
        },
        "BackOffPolicy": {
            "BackOffType": "fixed",
            "CfgItems": {"fix_ms": 50.0}
        },
        "RetrySameNode": true,
        "Extra": "notes"
    }
}"#;

const CLIENT_YAML: &[u8] = br#"
ClientBasicInfo:
  ServiceName: echo-client
  Method: echo
  Tags:
    idc: east
    tier: "1"
HostPorts:
  - "127.0.0.1:8888"
  - "127.0.0.1:8889"
DestService: echo-server
Protocol: grpc
Connection:
  Method: LongConnection
  LongConnection:
    MinIdlePerAddress: 1
    MaxIdlePerAddress: 4
    MaxIdleGlobal: 32
    MaxIdleTimeout: 30s
  MuxConnection:
    ConnNum: 6
FailureRetry:
  StopPolicy:
    MaxRetryTimes: 3
    MaxDurationMS: 2000
    DisableChainStop: false
    DDLStop: true
    CBPolicy:
      ErrorRate: 0.1
  BackOffPolicy:
    BackOffType: fixed
    CfgItems:
      fix_ms: 50.0
  RetrySameNode: true
  Extra: notes
"#;

#[test]
fn test_json_and_yaml_translate_identically() {
    let from_json: ConsulClientConfig = decode(ConfigFormat::Json, CLIENT_JSON).unwrap();
    let from_yaml: ConsulClientConfig = decode(ConfigFormat::Yaml, CLIENT_YAML).unwrap();

    let json_options = translate_consul_client(&from_json).unwrap();
    let yaml_options = translate_consul_client(&from_yaml).unwrap();
    assert_eq!(json_options, yaml_options);
    assert_eq!(json_options.len(), 7);
}

#[test]
fn test_absent_fields_emit_no_options() {
    let config: ConsulClientConfig = decode(ConfigFormat::Json, b"{}").unwrap();
    assert!(translate_consul_client(&config).unwrap().is_empty());

    // One populated field yields exactly one option.
    let config: ConsulClientConfig =
        decode(ConfigFormat::Json, br#"{"DestService": "svc-a"}"#).unwrap();
    let options = translate_consul_client(&config).unwrap();
    assert_eq!(options, vec![ClientOption::DestService("svc-a".to_string())]);
    assert_eq!(config.to_string(), "DestService: svc-a\n");
}

#[test]
fn test_server_pipeline_with_both_formats() {
    let json = br#"{
        "ServerBasicInfo": {"ServiceName": "echo", "Method": "", "Tags": {}},
        "ServiceAddr": [
            {"network": "tcp", "address": "127.0.0.1:8888"},
            {"network": "unix", "address": "/tmp/echo.sock"}
        ],
        "MuxTransport": true
    }"#;
    let yaml = br#"
ServerBasicInfo:
  ServiceName: echo
  Method: ""
  Tags: {}
ServiceAddr:
  - network: tcp
    address: "127.0.0.1:8888"
  - network: unix
    address: /tmp/echo.sock
MuxTransport: true
"#;
    let from_json: ConsulServerConfig = decode(ConfigFormat::Json, json).unwrap();
    let from_yaml: ConsulServerConfig = decode(ConfigFormat::Yaml, yaml).unwrap();
    let json_options = translate_server(&from_json).unwrap();
    let yaml_options = translate_server(&from_yaml).unwrap();
    assert_eq!(json_options, yaml_options);
    assert_eq!(json_options.len(), 4);
    assert_eq!(json_options[3], ServerOption::MuxTransport);
}

#[test]
fn test_mux_transport_false_emits_nothing() {
    let config: ConsulServerConfig =
        decode(ConfigFormat::Json, br#"{"MuxTransport": false}"#).unwrap();
    assert!(translate_server(&config).unwrap().is_empty());
}

#[test]
fn test_bad_address_in_list_fails_the_whole_translation() {
    let config: ConsulServerConfig = decode(
        ConfigFormat::Json,
        br#"{"ServiceAddr": [
            {"network": "tcp", "address": "127.0.0.1:1"},
            {"network": "bogus", "address": "host2:2"}
        ]}"#,
    )
    .unwrap();
    match translate_server(&config) {
        Err(ConfigError::UnknownNetworkFamily(tag)) => assert_eq!(tag, "bogus"),
        other => panic!("expected UnknownNetworkFamily, got {other:?}"),
    }
}

#[test]
fn test_etcd_variant_is_json_only() {
    let json = br#"{"DestService": "svc", "Protocol": "thrift"}"#;
    let config: EtcdClientConfig = decode_json_only(ConfigFormat::Json, json).unwrap();
    let options = translate_etcd_client(&config).unwrap();
    assert_eq!(options.len(), 2);

    let yaml_attempt: Result<EtcdClientConfig, _> =
        decode_json_only(ConfigFormat::Yaml, b"DestService: svc");
    assert!(matches!(
        yaml_attempt,
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_malformed_payload_never_yields_a_schema() {
    let result: Result<ConsulClientConfig, _> = decode(ConfigFormat::Json, b"{not json");
    assert!(matches!(result, Err(ConfigError::JsonDecode(_))));

    let result: Result<ConsulClientConfig, _> =
        decode(ConfigFormat::Yaml, b"DestService: [unclosed");
    assert!(matches!(result, Err(ConfigError::YamlDecode(_))));
}

#[test]
fn test_reload_keeps_previous_options_on_bad_push() {
    let active: ActiveOptions<ClientOption> = ActiveOptions::new();

    active
        .reload_with(|| {
            let config: ConsulClientConfig =
                decode(ConfigFormat::Json, br#"{"DestService": "svc-a"}"#)?;
            translate_consul_client(&config)
        })
        .unwrap();
    assert_eq!(active.load().len(), 1);

    // A push with an unresolvable address must not disturb the active set.
    let result = active.reload_with(|| {
        let config: ConsulClientConfig =
            decode(ConfigFormat::Json, br#"{"HostPorts": ["bad address"]}"#)?;
        translate_consul_client(&config)
    });
    assert!(result.is_err());
    assert_eq!(
        *active.load(),
        vec![ClientOption::DestService("svc-a".to_string())]
    );
}

//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::time::Duration;

use dns01_hostingde::{ClientOptions, HostingdeCredentials, HostingdeProvider};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key-0123456789";
pub const TEST_ZONE: &str = "example.com";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Provider pointed at the mock server.
pub fn provider_for(server: &MockServer) -> HostingdeProvider {
    provider_with_timeout(server, Duration::from_secs(30))
}

pub fn provider_with_timeout(server: &MockServer, timeout: Duration) -> HostingdeProvider {
    let credentials = HostingdeCredentials::new(TEST_API_KEY, TEST_ZONE)
        .expect("test credentials are valid");
    let options = ClientOptions::with_base_url(server.uri()).request_timeout(timeout);
    HostingdeProvider::with_options(credentials, &options).expect("创建测试 provider 失败")
}

/// `zoneUpdate` success document echoing the given records.
pub fn success_body(records: Value) -> Value {
    json!({
        "errors": [],
        "metadata": {
            "clientTransactionId": "",
            "serverTransactionId": "20240101000000000-dnsrobot-robot1-1234-1"
        },
        "response": {
            "records": records,
            "zoneConfig": {
                "id": "zone-1",
                "accountId": "acc-1",
                "name": TEST_ZONE,
                "nameUnicode": TEST_ZONE,
                "type": "NATIVE",
                "status": "active",
                "soaValues": {
                    "expire": 1_209_600,
                    "negativeTtl": 180,
                    "refresh": 86400,
                    "retry": 7200,
                    "serial": "2024010101",
                    "ttl": 86400
                },
                "zoneTransferWhitelist": []
            }
        },
        "status": "success",
        "warnings": []
    })
}

/// `zoneUpdate` failure document.
pub fn error_body() -> Value {
    json!({
        "errors": [{
            "code": 10205,
            "contextObject": "",
            "contextPath": "",
            "details": [],
            "text": "The zone does not exist.",
            "value": TEST_ZONE
        }],
        "metadata": {
            "clientTransactionId": "",
            "serverTransactionId": "20240101000000000-dnsrobot-robot1-1234-2"
        },
        "response": null,
        "status": "error",
        "warnings": []
    })
}

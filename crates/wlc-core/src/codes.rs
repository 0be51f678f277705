//! Service error codes.
//!
//! `errcode = 0` means success. Every other value the service documents is
//! listed here with its documented name and description, reproduced
//! verbatim. Lookup is pure; an `errcode` is never turned into a Rust error.

macro_rules! error_codes {
    ($($variant:ident = $code:literal, $name:literal, $message:literal;)+) => {
        /// A documented non-zero `errcode`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum ErrorCode {
            $(
                #[doc = $message]
                $variant = $code,
            )+
        }

        impl ErrorCode {
            /// Every documented code, in ascending order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant),+];

            /// Look up a raw `errcode`. Returns `None` for 0 and unknown codes.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The numeric code.
            pub fn code(self) -> i32 {
                self as i32
            }

            /// The documented identifier, e.g. `SYS REQ EXPIRE ERROR`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The documented description.
            pub fn message(self) -> &'static str {
                match self {
                    $(Self::$variant => $message,)+
                }
            }
        }
    };
}

error_codes! {
    SysError = 1001, "SYS ERROR", "系统错误";
    ResourceNotExist = 1002, "SYS REQ RESOURCE NOT EXIST", "接口请求的资源不存在";
    MethodError = 1003, "SYS REQ METHOD ERROR", "接口请求方式错误";
    HeaderMissing = 1004, "SYS REQ HEADER MISS ERROR", "接口请求核心参数缺失";
    IpNotAllowed = 1005, "SYS REQ IP ERROR", "接口请求IP地址非法";
    Busy = 1006, "SYS REQ BUSY ERROR", "接口请求超出流量限制";
    Expired = 1007, "SYS REQ EXPIRE ERROR", "接口请求过期";
    PartnerInvalid = 1008, "SYS REQ PARTNER ERROR", "接口请求方身份非法";
    PartnerAuthDisabled = 1009, "SYS REQ PARTNER AUTH DISABLE", "接口请求方权限未启用";
    NoInterfaceAuth = 1010, "SYS REQ AUTH ERROR", "接口请求方无该接口权限";
    SignatureFailed = 1011, "SYS REQ PARTNER AUTH ERROR", "接口请求方身份核验错误";
    ParamCheckFailed = 1012, "SYS REQ PARAM CHECK ERROR", "接口请求报文核验失败";
    IdNumIllegal = 2001, "BUS AUTH IDNUM ILLEGAL", "身份证号格式校验失败";
    AuthResourceLimit = 2002, "BUS AUTH RESOURCE LIMIT", "实名认证条目已达上限";
    NoAuthRecord = 2003, "BUS AUTH CODE NO AUTH RECODE", "无该编码提交的实名认证记录";
    CodeInUse = 2004, "BUS AUTH CODE ALREADY IN USE", "编码已经被占用";
    PartialReport = 3001, "BUS COLL PARTIAL ERROR", "行为数据部分上报失败";
    BehaviorNull = 3002, "BUS COLL BEHAVIOR NULL ERROR", "行为数据为空";
    OverLimitCount = 3003, "BUS COLL OVER LIMIT COUNT", "行为数据超出条目数量限制";
    NoInvalid = 3004, "BUS COLL NO INVALID", "行为数据编码错误";
    BehaviorTimeError = 3005, "BUS COLL BEHAVIOR TIME ERROR", "行为发生时间错误";
    PlayerModeInvalid = 3006, "BUS COLL PLAYER MODE INVALID", "用户类型无效";
    BehaviorModeInvalid = 3007, "BUS COLL BEHAVIOR MODE INVALID", "行为类型无效";
    PlayerIdMissing = 3008, "BUS COLL PLAYERID MISS", "缺失PI（用户唯一标识）值";
    DeviceIdMissing = 3009, "BUS COLL DEVICEID MISS", "缺失DI（设备标识）值";
    PlayerIdInvalid = 3010, "BUS COLL PI ERROR", "PI（用户唯一标识）值无效";
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.code(), self.name(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_roundtrip() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_code(code.code()), Some(*code));
        }
        assert_eq!(ErrorCode::ALL.len(), 26);
    }

    #[test]
    fn test_success_and_unknown_are_none() {
        assert_eq!(ErrorCode::from_code(0), None);
        assert_eq!(ErrorCode::from_code(9999), None);
        assert_eq!(ErrorCode::from_code(-1), None);
    }

    #[test]
    fn test_documented_entries() {
        let sig = ErrorCode::from_code(1011).unwrap();
        assert_eq!(sig, ErrorCode::SignatureFailed);
        assert_eq!(sig.name(), "SYS REQ PARTNER AUTH ERROR");
        assert_eq!(sig.message(), "接口请求方身份核验错误");

        assert_eq!(ErrorCode::Busy.code(), 1006);
        assert_eq!(ErrorCode::IdNumIllegal.message(), "身份证号格式校验失败");
        assert_eq!(ErrorCode::DeviceIdMissing.message(), "缺失DI（设备标识）值");
    }

    #[test]
    fn test_codes_sorted_and_unique() {
        let codes: Vec<i32> = ErrorCode::ALL.iter().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ErrorCode::Expired.to_string(),
            "1007 SYS REQ EXPIRE ERROR (接口请求过期)"
        );
    }
}

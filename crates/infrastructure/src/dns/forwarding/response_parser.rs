use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DnsResponse, DomainError, ResourceRecord};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a wire-format reply into the three record sections.
    ///
    /// Names keep their wire (ASCII) form, so `xn--` labels are not decoded.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = DnsResponse {
            id: message.id(),
            rcode: RecordTypeMapper::rcode_from_hickory(message.response_code()),
            question: message.queries().first().map(|q| q.name().to_ascii()),
            truncated: message.truncated(),
            answer: Self::convert(message.answers()),
            authority: Self::convert(message.name_servers()),
            additional: Self::convert(message.additionals()),
        };

        debug!(
            rcode = %response.rcode,
            answer = response.answer.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    fn convert(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().map(Self::to_resource_record).collect()
    }

    fn to_resource_record(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => a.0.to_string(),
            RData::AAAA(aaaa) => aaaa.0.to_string(),
            RData::NS(ns) => ns.to_ascii(),
            RData::CNAME(canonical) => canonical.to_ascii(),
            other => other.to_string(),
        };

        ResourceRecord {
            name: record.name().to_ascii(),
            record_type: RecordTypeMapper::from_hickory(record.record_type()),
            ttl: record.ttl(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootwalk_domain::{RecordType, ResponseCode};

    /// Header with the given counts, followed by `example.com A IN`.
    fn header(id: u16, flags: [u8; 2], an: u16, ns: u16) -> Vec<u8> {
        let mut msg = Vec::new();
        msg.extend_from_slice(&id.to_be_bytes());
        msg.extend_from_slice(&flags);
        msg.extend_from_slice(&1u16.to_be_bytes());
        msg.extend_from_slice(&an.to_be_bytes());
        msg.extend_from_slice(&ns.to_be_bytes());
        msg.extend_from_slice(&0u16.to_be_bytes());
        msg.extend_from_slice(b"\x07example\x03com\x00");
        msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        msg
    }

    #[test]
    fn test_parse_answer() {
        let mut msg = header(0x1234, [0x84, 0x00], 1, 0);
        msg.extend_from_slice(&[
            0xc0, 0x0c, // name -> example.com
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x0e, 0x10, // TTL 3600
            0x00, 0x04, 93, 184, 216, 34,
        ]);

        let response = ResponseParser::parse(&msg).unwrap();

        assert_eq!(response.id, 0x1234);
        assert_eq!(response.rcode, ResponseCode::NoError);
        assert_eq!(response.question.as_deref(), Some("example.com."));
        assert_eq!(response.answer.len(), 1);
        let record = &response.answer[0];
        assert_eq!(record.name, "example.com.");
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.data, "93.184.216.34");
    }

    #[test]
    fn test_parse_referral_authority() {
        let mut msg = header(7, [0x80, 0x00], 0, 1);
        msg.extend_from_slice(&[
            0xc0, 0x14, // name -> com.
            0x00, 0x02, // NS
            0x00, 0x01, // IN
            0x00, 0x02, 0xa3, 0x00, // TTL 172800
            0x00, 0x14, // rdlength 20
        ]);
        msg.extend_from_slice(b"\x01a\x0cgtld-servers\x03net\x00");

        let response = ResponseParser::parse(&msg).unwrap();

        assert!(!response.has_answer());
        assert_eq!(response.authority.len(), 1);
        assert_eq!(response.authority[0].name, "com.");
        assert_eq!(response.authority[0].record_type, RecordType::NS);
        assert_eq!(response.authority[0].data, "a.gtld-servers.net.");
        assert_eq!(response.referrals().len(), 1);
    }

    #[test]
    fn test_parse_nxdomain_rcode() {
        let msg = header(9, [0x81, 0x83], 0, 0);
        let response = ResponseParser::parse(&msg).unwrap();
        assert_eq!(response.rcode, ResponseCode::NXDomain);
    }

    #[test]
    fn test_punycode_names_stay_ascii() {
        let mut msg = Vec::new();
        msg.extend_from_slice(&[0x00, 0x05, 0x84, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        msg.extend_from_slice(b"\x0cxn--bcher-kva\x07example\x00");
        msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        msg.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x04, 10, 0, 0, 1]);

        let response = ResponseParser::parse(&msg).unwrap();

        assert_eq!(response.question.as_deref(), Some("xn--bcher-kva.example."));
        assert_eq!(response.answer[0].name, "xn--bcher-kva.example.");
        assert!(response.answers_question_for("xn--bcher-kva.example"));
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(ResponseParser::parse(&[0x00, 0x01, 0x02]).is_err());
    }
}

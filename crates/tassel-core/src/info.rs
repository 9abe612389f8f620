//! The static graduation-info record and the fixed sample guest list.
//!
//! Both are configuration data, not managed entities: there are no create,
//! update, or delete operations over them anywhere in the system.

use serde::{Deserialize, Serialize};

/// Details of the graduation ceremony, shown on the invitation pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduationInfo {
  pub graduate_name:         String,
  pub major:                 String,
  pub university:            String,
  pub university_vietnamese: String,
  pub date:                  String,
  pub time:                  String,
  pub location:              String,
  pub address:               String,
}

impl GraduationInfo {
  /// The one fixed record this deployment serves.
  pub fn current() -> Self {
    Self {
      graduate_name:         "Nguyen Van Tuyen".to_owned(),
      major:                 "Khoa học máy tính".to_owned(),
      university:            "Hanoi University of Industry".to_owned(),
      university_vietnamese: "Trường Đại Học Công Nghiệp Hà Nội".to_owned(),
      date:                  "19/8/2025".to_owned(),
      time:                  "08:00".to_owned(),
      location:              "Tầng 3 - Thư viện tòa A11".to_owned(),
      address:               "Số 298 Đ. Cầu Diễn, Minh Khai, Bắc Từ Liêm, Hà Nội".to_owned(),
    }
  }
}

/// The invitees seeded by the `init-data` operation.
pub const SAMPLE_GUEST_NAMES: [&str; 11] = [
  "HÀ NGUYỄN TUẤN KIỆT",
  "VŨ VĂN HẬU",
  "TRẦN THỊ PHƯƠNG LAN",
  "NGUYỄN THỊ HẠNH",
  "PHẠM HUYỀN DIỆU",
  "NGUYỄN THỊ KHUYÊN",
  "NGUYỄN THỊ PHƯƠNG",
  "NGUYỄN THỊ HÀ",
  "PHẠM VĂN ANH TÙNG",
  "NGUYỄN QUANG THẮNG",
  "NGUYỄN HỮU TUẤN",
];

#[cfg(test)]
mod tests {
  use super::SAMPLE_GUEST_NAMES;
  use crate::slug::slugify;

  #[test]
  fn sample_names_produce_distinct_slugs() {
    let mut slugs: Vec<String> =
      SAMPLE_GUEST_NAMES.iter().map(|n| slugify(n)).collect();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), SAMPLE_GUEST_NAMES.len());
  }
}

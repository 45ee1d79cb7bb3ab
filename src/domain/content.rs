//! Static Site Copy
//!
//! Long-form bilingual text rendered on the project list page. Short UI
//! labels live in the locale files instead.

/// A compile-time Korean/English pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub ko: &'static str,
    pub en: &'static str,
}

impl Bilingual {
    pub const fn new(ko: &'static str, en: &'static str) -> Self {
        Self { ko, en }
    }
}

/// A dated entry in the site-wide development log
#[derive(Debug, Clone, Copy)]
pub struct DevLogEntry {
    pub date: &'static str,
    pub content: Bilingual,
}

/// An e-mail contact rendered as a `mailto:` link
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const SITE_OWNER: &str = "Jisrubyy";

pub const WELCOME_TITLE: Bilingual = Bilingual::new("Jisrubyy의 프로젝트", "Jisrubyy's Projects");

pub const WELCOME_TEXT: Bilingual = Bilingual::new(
    "다양한 프로젝트와 개발 과정을 기록하고 공유합니다.",
    "Recording and sharing various projects and development processes.",
);

pub const INTRO_SUBTITLE: Bilingual = Bilingual::new(
    "Jisrubyy 웹페이지에 오신 것을 환영합니다",
    "Welcome to Jisrubyy Website",
);

pub const DEV_LOG: &[DevLogEntry] = &[DevLogEntry {
    date: "2025.10.29",
    content: Bilingual::new("최초 릴리즈", "Initial release"),
}];

pub const DEVELOPER_ROLE: Bilingual = Bilingual::new("소프트웨어 개발자", "Software Developer");

pub const DEVELOPER_BIO: Bilingual = Bilingual::new(
    "다양한 프로그램 개발과 웹 기술에 관심이 많습니다. 사용자 경험을 최우선으로 생각하며, 실용적이고 효율적인 솔루션을 만들기 위해 노력하고 있습니다.",
    "Interested in various program development and web technologies. I prioritize user experience and strive to create practical and efficient solutions.",
);

pub const CONTACT_PROMPT: Bilingual = Bilingual::new(
    "문의사항이 있으시면 아래 이메일로 연락주세요.",
    "If you have any inquiries, please contact us via email below.",
);

pub const CONTACTS: &[Contact] = &[
    Contact { email: "jisrubyy@gmail.com" },
    Contact { email: "zegtern@kakao.com" },
];

pub const PRIVACY_POLICY: Bilingual = Bilingual::new(
    "이 개인정보처리방침은 JISRUBYY가 제공하는 모든 플랫폼(기기) 앱 및 웹(이하 \"응용프로그램(또는 본 웹)\")에 적용됩니다(이하 \"서비스 제공자\"). 본 서비스는 \"있는 그대로(AS IS)\" 제공됩니다.",
    "This privacy policy applies to the all JISRUBYY app and web (hereby referred to as \"Application(or this web)\") for all devices(mobile and all platform, pc , etc) that was created by JISRUBYY (hereby referred to as \"Service Provider\") all services. This service is intended for use \"AS IS\".",
);

pub const COOKIE_NOTICE: Bilingual = Bilingual::new(
    "이 웹사이트는 최적의 경험을 제공하기 위해 쿠키를 사용합니다. 계속 탐색하면 쿠키 사용에 동의하는 것으로 간주됩니다.",
    "This website uses cookies to ensure you get the best experience. By continuing to browse, you agree to our use of cookies.",
);

pub const COPYRIGHT: Bilingual = Bilingual::new(
    "© 2025 ~ Jisrubyy. 모든 권리 보유.",
    "© 2025 ~ Jisrubyy. All rights reserved.",
);

pub const DONATION_URL: &str = "https://buymeacoffee.com/jisrubyy";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_render_as_mailto_links() {
        let links: Vec<_> = CONTACTS.iter().map(Contact::mailto).collect();
        assert_eq!(
            links,
            vec!["mailto:jisrubyy@gmail.com", "mailto:zegtern@kakao.com"]
        );
    }
}

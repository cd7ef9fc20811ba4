use std::collections::BTreeMap;

use serde::Serialize;

/// UI strings for one language.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTable {
    pub share_title: &'static str,
    pub cancel: &'static str,
    pub copy: &'static str,
    pub print: &'static str,
    pub email: &'static str,
    pub select_sms: &'static str,
}

/// A resolved locale: the language-specific UI strings layered over the
/// locale-invariant destination display names. The layering is a shallow
/// merge; a locale key always wins over a default key of the same name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    #[serde(flatten)]
    pub ui: LocaleTable,
    pub destinations: BTreeMap<&'static str, &'static str>,
}

/// Picks the UI strings for a share sheet.
///
/// First match wins: an explicitly requested locale, the full navigator tag
/// (e.g. `pt-BR`), its lowercased two-letter primary subtag, then English.
pub fn resolve(requested: Option<&str>, navigator: &str) -> LocaleBundle {
    let ui = requested
        .and_then(lookup)
        .or_else(|| lookup(navigator))
        .or_else(|| {
            navigator
                .get(0..2)
                .and_then(|primary| lookup(&primary.to_ascii_lowercase()))
        })
        .unwrap_or(EN);
    LocaleBundle {
        ui,
        destinations: DESTINATION_NAMES.iter().copied().collect(),
    }
}

fn lookup(tag: &str) -> Option<LocaleTable> {
    TABLES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, table)| *table)
}

/// Display names for the built-in destinations; the same in every language.
const DESTINATION_NAMES: &[(&str, &str)] = &[
    ("sms", "SMS"),
    ("messenger", "Messenger"),
    ("whatsapp", "WhatsApp"),
    ("twitter", "Twitter"),
    ("linkedin", "Linkedin"),
    ("telegram", "Telegram"),
    ("facebook", "Facebook"),
    ("skype", "Skype"),
    ("pinterest", "Pinterest"),
];

const EN: LocaleTable = LocaleTable {
    share_title: "Share",
    cancel: "Cancel",
    copy: "Copy",
    print: "Print",
    email: "E-mail",
    select_sms: "Pick a contact",
};

const TABLES: &[(&str, LocaleTable)] = &[
    (
        "cs",
        LocaleTable {
            share_title: "Sdílet",
            cancel: "Zrušit",
            copy: "Kopírovat",
            print: "Tisk",
            email: "E-mail",
            select_sms: "Vyberte kontakt",
        },
    ),
    (
        "sk",
        LocaleTable {
            share_title: "Zdieľať",
            cancel: "Zrušiť",
            copy: "Kopírovat",
            print: "Tlač",
            email: "E-mail",
            select_sms: "Vyberte kontakt",
        },
    ),
    (
        "ja",
        LocaleTable {
            share_title: "共有する",
            cancel: "キャンセル",
            copy: "コピーする",
            print: "印刷する",
            email: "E-mail",
            select_sms: "連絡先を選択してください",
        },
    ),
    (
        "zh",
        LocaleTable {
            share_title: "分享",
            cancel: "取消",
            copy: "複製連結",
            print: "列印",
            email: "E-mail",
            select_sms: "選擇聯絡人",
        },
    ),
    (
        "pt",
        LocaleTable {
            share_title: "Compartilhar",
            cancel: "Cancelar",
            copy: "Copiar",
            print: "Imprimir",
            email: "E-mail",
            select_sms: "Selecione um contato",
        },
    ),
    ("en", EN),
    (
        "es",
        LocaleTable {
            share_title: "Compartir",
            cancel: "Cancelar",
            copy: "Copiar",
            print: "Imprimir",
            email: "Correo",
            select_sms: "Seleccionar un contacto",
        },
    ),
    (
        "fr",
        LocaleTable {
            share_title: "Partager",
            cancel: "Annuler",
            copy: "Copier",
            print: "Imprimer",
            email: "E-mail",
            select_sms: "Veuillez choisir un contact",
        },
    ),
    (
        "de",
        LocaleTable {
            share_title: "Teilen",
            cancel: "Abbrechen",
            copy: "Kopieren",
            print: "Drucken",
            email: "E-mail",
            select_sms: "Wählen Sie einen Kontakt aus",
        },
    ),
    (
        "it",
        LocaleTable {
            share_title: "Condividi",
            cancel: "Annulla",
            copy: "Copia",
            print: "Stampa",
            email: "Email",
            select_sms: "Seleziona un contatto",
        },
    ),
    (
        "nl",
        LocaleTable {
            share_title: "Delen",
            cancel: "Annuleren",
            copy: "Kopiëren",
            print: "Printen",
            email: "E-mail",
            select_sms: "Selecteer een contact",
        },
    ),
    (
        "sv",
        LocaleTable {
            share_title: "Dela",
            cancel: "Avbryt",
            copy: "Kopiera",
            print: "Skriv ut",
            email: "E-mail",
            select_sms: "Välj en kontakt",
        },
    ),
    (
        "da",
        LocaleTable {
            share_title: "Del",
            cancel: "Luk",
            copy: "Kopiér",
            print: "Udskriv",
            email: "E-mail",
            select_sms: "Vælg en kontaktperson",
        },
    ),
    // Retired alias of "da", kept for callers still sending it.
    (
        "dk",
        LocaleTable {
            share_title: "Del",
            cancel: "Luk",
            copy: "Kopiér",
            print: "Udskriv",
            email: "E-mail",
            select_sms: "Vælg en kontaktperson",
        },
    ),
    (
        "ru",
        LocaleTable {
            share_title: "Поделиться",
            cancel: "Отмена",
            copy: "Скопировать",
            print: "Печать",
            email: "Э-майл",
            select_sms: "Выбери контакт",
        },
    ),
    (
        "tr",
        LocaleTable {
            share_title: "Paylaş",
            cancel: "Vazgeç",
            copy: "Kopyala",
            print: "Yazdır",
            email: "E-posta",
            select_sms: "Bir kişi seç",
        },
    ),
    (
        "ko",
        LocaleTable {
            share_title: "공유",
            cancel: "취소",
            copy: "링크 복사",
            print: "인쇄",
            email: "E-mail",
            select_sms: "연락처를 선택하세요",
        },
    ),
    (
        "ta",
        LocaleTable {
            share_title: "பகிர்",
            cancel: "இரத்து",
            copy: "நகலெடு",
            print: "அச்சிடு",
            email: "மின்னஞ்சல்",
            select_sms: "ஒரு தொடர்பைத் தேர்வுசெய்க",
        },
    ),
    (
        "pl",
        LocaleTable {
            share_title: "Dzielić",
            cancel: "Anuluj",
            copy: "Kopiuj",
            print: "Wydrukować",
            email: "E-mail",
            select_sms: "Wybierz kontakt",
        },
    ),
    (
        "is",
        LocaleTable {
            share_title: "Deila",
            cancel: "Hætta við",
            copy: "Afrita",
            print: "Prenta",
            email: "Póstur",
            select_sms: "Veldu tengilið",
        },
    ),
    (
        "hu",
        LocaleTable {
            share_title: "Megosztás",
            cancel: "Bezárás",
            copy: "Másolás",
            print: "Nyomtatás",
            email: "E-mail",
            select_sms: "Válasszon egy kontaktot",
        },
    ),
    (
        "hi",
        LocaleTable {
            share_title: "शेयर करें",
            cancel: "रद्द करें",
            copy: "कॉपी करें",
            print: "प्रिंट करें",
            email: "ईमेल",
            select_sms: "संपर्क चुनें",
        },
    ),
    (
        "be",
        LocaleTable {
            share_title: "শেয়ার করুন",
            cancel: "বাতিল করুন",
            copy: "কপি করুন",
            print: "প্রিন্ট করুন",
            email: "ই মেইল",
            select_sms: "পরিচিতি নির্বাচন করুন",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn navigator_tag_falls_back_to_primary_subtag() {
        let bundle = resolve(None, "pt-BR");
        assert_eq!(bundle.ui.share_title, "Compartilhar");
    }

    #[test]
    fn requested_locale_wins_over_navigator() {
        let bundle = resolve(Some("fr"), "de-DE");
        assert_eq!(bundle.ui.share_title, "Partager");
    }

    #[test]
    fn unknown_requested_locale_falls_back_to_navigator() {
        let bundle = resolve(Some("tlh"), "de");
        assert_eq!(bundle.ui.share_title, "Teilen");
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        let bundle = resolve(None, "xx-YY");
        assert_eq!(bundle.ui.share_title, "Share");
    }

    #[test]
    fn short_navigator_tags_do_not_panic() {
        let bundle = resolve(None, "x");
        assert_eq!(bundle.ui.share_title, "Share");
        let bundle = resolve(None, "");
        assert_eq!(bundle.ui.cancel, "Cancel");
    }

    #[test]
    fn destination_names_ride_along_every_locale() {
        let bundle = resolve(None, "ja");
        assert_eq!(bundle.destinations.get("whatsapp"), Some(&"WhatsApp"));
        assert_eq!(bundle.destinations.get("telegram"), Some(&"Telegram"));
    }
}

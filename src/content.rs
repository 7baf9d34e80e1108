// Static copy for the landing page sections.

pub const SECTION_ABOUT: &str = "sobre";
pub const SECTION_JOURNEY: &str = "como-funciona";
pub const SECTION_CONTACT: &str = "contato";

pub const CONTACT_WHATSAPP_DISPLAY: &str = "(11) 96597-0387";
pub const CONTACT_WHATSAPP_LINK: &str = "https://wa.me/5511965970387";

pub struct HeroCopy {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta_text: &'static str,
    pub image_url: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct JourneyStep {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    headline: "Você não precisa passar por isso sozinha.",
    subheadline: "O Portal Pausa é um abraço digital para mulheres na peri/menopausa. Cuidado inteligente que escuta, acolhe e guia - direto no seu WhatsApp.",
    cta_text: "Quero conhecer o GIS",
    image_url: "https://images.unsplash.com/photo-1491438590914-bc09fcaaf77a?crop=entropy&cs=srgb&fm=jpg&q=85",
};

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "👂",
        title: "Falamos sua língua",
        description: "Conte seus sintomas no WhatsApp, como falaria com uma amiga. Nossa IA entende sua linguagem natural, sem termos médicos complicados.",
    },
    Feature {
        icon: "🤝",
        title: "Cuidado que se adapta a você",
        description: "Receba micro-hábitos possíveis para seu dia a dia, baseados em evidências científicas. Pequenas ações, grandes mudanças.",
    },
    Feature {
        icon: "📈",
        title: "Seu bem-estar ajuda outras mulheres",
        description: "Seus relatos anônimos viram dados que ajudam a criar políticas públicas mais justas para todas.",
    },
];

pub const JOURNEY: [JourneyStep; 4] = [
    JourneyStep {
        number: 1,
        icon: "💬",
        title: "Você relata seus sintomas no WhatsApp",
    },
    JourneyStep {
        number: 2,
        icon: "💜",
        title: "Nossa IA analisa com empatia e ciência",
    },
    JourneyStep {
        number: 3,
        icon: "✉️",
        title: "Você recebe orientações acolhedoras",
    },
    JourneyStep {
        number: 4,
        icon: "👭",
        title: "Juntas, transformamos a saúde feminina",
    },
];

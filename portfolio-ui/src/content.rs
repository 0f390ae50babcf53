//! Static page copy and card data, kept apart from the rendering components.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
    pub image_url: &'static str,
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub youtube_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Game {
    pub app_icon: &'static str,
    pub title: &'static str,
    /// Blank-line separated paragraphs.
    pub description: &'static str,
    /// YouTube id of the trailer embedded above the card.
    pub trailer_id: &'static str,
    pub trailer_title: &'static str,
    pub facebook_url: Option<&'static str>,
    pub twitter_url: Option<&'static str>,
    pub wiki_url: Option<&'static str>,
    pub youtube_url: Option<&'static str>,
    pub facts: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub screenshots: &'static [Screenshot],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLogo {
    pub image_url: &'static str,
    pub alt: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const GITHUB_PROFILE_URL: &str = "https://github.com/stephenmcvicker";

pub const ABOUT_INTRO: &str = "Creative software developer with 8 years of expertise \
across games, web, and mobile applications. 3+ years of experience as a Frontend \
engineer using modern frameworks like Vue and React, while building with best \
practices in mind. Excellent focus, communication, and ability to learn rapidly.";

pub const ABOUT_LOCATION: &str = "Born, raised and living in Dublin, Ireland.";

pub const ABOUT_CALIS_PROJECTS: &str = "In 2012 I started my own business upon the \
release of my first mobile game which I developed more content regularly for the \
following 4 years. Aside from the development work, I maintained social media \
channels, personal websites, and worked remotely with excellent people from around \
the world.";

pub const ABOUT_FRONTEND_INTRO: &str = "My love for visual design, combined with my \
desire to constantly learn and improve has led me to frontend development for the \
last few years. I'm currently working as a Frontend Engineer with a great Irish \
Fintech company, ";

pub const ABOUT_FRONTEND_STACK: &str = "I started in October 2020 with my main tech \
stack using Vue, Nuxt (for SSR), and I18n.";

pub const BONKERS_URL: &str = "https://bonkers.ie";

pub const BONKERS_LOGO_URL: &str =
    "https://web-assets.bonkers.ie/maverick/img/bonkers-logo-white.76cceab.svg";

pub const CALIS_LOGO_URL: &str = "/CPMaskLogo2.png";

pub const ABOUT_CRAFT: &str = "I strive to have a deep understanding of the code I \
write. I enjoy learning as much as I can about the frameworks I use on projects. \
Lighthouse scores are a great way to keep track of the frontend of your application \
in the browser and I aim to always have lovely green scores across each category. \
This website should be no different.";

pub static SKILLS: [SkillLogo; 5] = [
    SkillLogo {
        image_url: "/logovue.png",
        alt: "vue-logo",
        blurb: "Vue, my current love!",
    },
    SkillLogo {
        image_url: "/logoreact.png",
        alt: "react-logo",
        blurb: "React, the big dog in all of this.",
    },
    SkillLogo {
        image_url: "/logojs.png",
        alt: "javascript-logo",
        blurb: "Javascript, powering all of this.",
    },
    SkillLogo {
        image_url: "/logocss.png",
        alt: "css-logo",
        blurb: "CSS, makin' stuff look good.",
    },
    SkillLogo {
        image_url: "/logounity.png",
        alt: "unity-game-engine-logo",
        blurb: "Unity, the best game engine for an indie creator.",
    },
];

pub static WEB_PROJECTS: [Project; 6] = [
    Project {
        title: "Mobile 'Friend List' UI",
        description: "Designed to feel more like a native 'app' when added to your \
mobile phone screen thanks to some handy meta tags.",
        tags: &[
            Tag { label: "#Vue", color: Some("#04b07e") },
            Tag { label: "#Fetch", color: None },
            Tag { label: "#Mobile", color: None },
            Tag { label: "#Meta", color: None },
        ],
        image_url: "/friendlistscreenshot.png",
        demo_url: Some("https://stephenmcvicker.github.io/friend-list-pwa/"),
        github_url: Some("https://github.com/StephenMcVicker/friend-list-pwa"),
        youtube_url: None,
    },
    Project {
        title: "Gify Search",
        description: "One of my earlier experiments when learning Vue and deploying \
to Netlify.",
        tags: &[
            Tag { label: "#Vue", color: Some("#04b07e") },
            Tag { label: "#netlify", color: None },
            Tag { label: "#Gify", color: None },
        ],
        image_url: "/Gifyscreenshot.png",
        demo_url: Some("https://giphy-search-94c768.netlify.app/"),
        github_url: Some("https://github.com/StephenMcVicker/friend-list-pwa"),
        youtube_url: None,
    },
    Project {
        title: "The Random Beer App",
        description: "A private project using the BreweryDB API. Fetches a random \
beer and stores brewery info. Designed with mobile as a focus.",
        tags: &[
            Tag { label: "#Router", color: None },
            Tag { label: "#Fetch", color: None },
            Tag { label: "#FramerMotion", color: Some("#A826EB") },
        ],
        image_url: "/BeerScreenshot.png",
        demo_url: None,
        github_url: None,
        youtube_url: Some("https://youtu.be/f2kSzna6f7o"),
    },
    Project {
        title: "Password Generator",
        description: "Using styled components, along with the ability to select \
custom themes, I wanted to create a React version of a tutorial by Florin Poppin.",
        tags: &[
            Tag { label: "#React", color: Some("#4D9BE3") },
            Tag { label: "#Themes", color: None },
        ],
        image_url: "/PasswordGeneratorDesktop.png",
        demo_url: Some("https://stephenmcvicker.github.io/password-generator/"),
        github_url: Some("https://github.com/stephenmcvicker/password-generator"),
        youtube_url: None,
    },
    Project {
        title: "Currency Convertor",
        description: "External API for fetching price. Uses ES6 Map and Set to store \
the currency symbols. Dark theme included.",
        tags: &[
            Tag { label: "#React", color: Some("#4D9BE3") },
            Tag { label: "#Fetch", color: None },
        ],
        image_url: "/CurrencyConverterScreenshot.png",
        demo_url: Some("https://stephenmcvicker.github.io/currency-converter/"),
        github_url: Some("https://github.com/stephenmcvicker/currency-converter"),
        youtube_url: None,
    },
    Project {
        title: "This website",
        description: "Custom made, reusable components. Easily change styles and \
expand elements using props.",
        tags: &[
            Tag { label: "#Rust", color: Some("#4D9BE3") },
            Tag { label: "#Components", color: None },
        ],
        image_url: "/WebsiteCodeScreenshot.png",
        demo_url: Some("https://stephenmcvicker.github.io/portfolio/index.html"),
        github_url: Some("https://github.com/stephenmcvicker/portfolio"),
        youtube_url: None,
    },
];

pub static GAMES: [Game; 2] = [
    Game {
        app_icon: "/zenformsappicon.png",
        title: "ZENFORMS: Protectors",
        description: "A 2D RPG for iOS, Android. Capture monsters, battle others, \
and go on an amazing adventure.\n\nA great single player story to experience and \
robust online features, known as the CP Garden, allowing you to interact with a \
huge community of players and participate in online trades, battles, and events.",
        trailer_id: "XxNpuetG8qI",
        trailer_title: "ZENFORMS: Protectors Trailer",
        facebook_url: Some("https://www.facebook.com/zenforms/"),
        twitter_url: Some("https://twitter.com/zenforms"),
        wiki_url: Some("https://zenforms.fandom.com/wiki/ZENFORMS:_Protectors_Wiki"),
        youtube_url: Some("https://www.youtube.com/user/CalisProjectsOffical"),
        facts: &[
            "First release: September 2012",
            "Updates and support: For 4 years+",
            "Dedicated online community",
            "Over 250,000 players during it's lifetime",
        ],
        tech: &[
            "Objective-C",
            "PHP + MySQL for online backend service",
            "Cocos2D",
            "Xcode",
            "Photoshop",
            "Various handcrafted tools by me such as a particle effect editor and attack creator",
        ],
        screenshots: &[
            Screenshot { url: "/zpscreen6.gif", alt: "rain-battle" },
            Screenshot { url: "/zpscreen2.png", alt: "talking-to-abel" },
            Screenshot { url: "/zpscreen3.png", alt: "picking-your-starter" },
            Screenshot { url: "/zpscreen1.png", alt: "2-v-1" },
            Screenshot { url: "/zpscreen5.png", alt: "online-mode" },
            Screenshot { url: "/zpscreen4.gif", alt: "volcano-battle" },
        ],
    },
    Game {
        app_icon: "/shapeshipappicon.png",
        title: "ShapeShip",
        description: "Shape Ship is easy to learn but difficult to master. It's also \
a ton of fun!\n\nHow far can you guide your ship through the endless void that is \
space? Be careful not to crash or you'll have to start again.\n\nCollect Stars and \
spend them on boosts and shields to help you go further.",
        trailer_id: "xZjCAs_0-I8",
        trailer_title: "Shapeship Launch Trailer",
        facebook_url: Some("https://www.facebook.com/CalisProjects"),
        twitter_url: Some("https://twitter.com/CalisProjects"),
        wiki_url: None,
        youtube_url: Some("https://www.youtube.com/channel/UCdTFAAia9DLfMuH2cCdoL0Q"),
        facts: &[
            "My first project created in Unity game engine",
            "The goal was to learn Unity and implement mobile features such as ad viewing and in-app purchases",
            "Created and completed in just 1 month",
        ],
        tech: &["C#", "Unity", "In-App Purchases", "Unity Ads"],
        screenshots: &[],
    },
];

pub static CONTACT_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        icon: "{ }",
        url: "https://github.com/stephenmcvicker",
    },
    SocialLink {
        label: "Twitter",
        icon: "@",
        url: "https://twitter.com/CalisProjects",
    },
    SocialLink {
        label: "YouTube",
        icon: "▶",
        url: "https://www.youtube.com/channel/UCdTFAAia9DLfMuH2cCdoL0Q",
    },
    SocialLink {
        label: "Email",
        icon: "✉",
        url: "mailto:hello@stephenmcvicker.ie",
    },
];

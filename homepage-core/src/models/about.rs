use serde::{Deserialize, Serialize};

const TITLE: &str = "Here is a little about me!";

// testo servito così com'è, indentazione e spazi finali inclusi
const BODY: &str = concat!(
    "Hello! I’m Jiaying, a senior majoring in Interactive Media Arts at Tisch and minoring in Computer Science. \n",
    "      I’m from New York, and my favorite color is blue. I enjoy listening to K-pop and R&B music, and in my free time \n",
    "      I love drawing, DIYing, and crocheting—a hobby I picked up during the pandemic. At this point, I’ve collected a small \n",
    "      mountain of yarn at home and enjoy making little accessories like bags and charms. I’m especially interested in projects \n",
    "      that combine art and technology, particularly those that explore storytelling or playful interaction. I’m also a big fan \n",
    "      of coffee and anything matcha-flavored.\n",
    "      \n",
    "      Over the summer, my family and I took a short trip to Banff, Canada, where we went hiking and saw lots of beautiful \n",
    "      lakes and scenery. I also went on a trip to Boston with my friends,it was my first time traveling without my family, \n",
    "      and I got to celebrate my birthday right before the new semester began, which made the break even more special.",
);

const IMG_URL: &str = "/Jiaying.jpeg";

/// Contenuto statico della pagina About. Non viene mai salvato.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub body: String,
    pub img_url: String,
}

impl AboutContent {
    /// Costruisce il contenuto della pagina; sempre lo stesso valore.
    pub fn page() -> Self {
        Self {
            title: TITLE.to_string(),
            body: BODY.to_string(),
            img_url: IMG_URL.to_string(),
        }
    }
}

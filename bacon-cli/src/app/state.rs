/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreatePost,
    UploadVideo,
    Follow,
    Unfollow,
    ViewStats,
    PlayGame,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreatePost,
        MenuChoice::UploadVideo,
        MenuChoice::Follow,
        MenuChoice::Unfollow,
        MenuChoice::ViewStats,
        MenuChoice::PlayGame,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::CreatePost => "1",
            MenuChoice::UploadVideo => "2",
            MenuChoice::Follow => "3",
            MenuChoice::Unfollow => "4",
            MenuChoice::ViewStats => "5",
            MenuChoice::PlayGame => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreatePost => "Create a post",
            MenuChoice::UploadVideo => "Upload a video",
            MenuChoice::Follow => "Follow someone",
            MenuChoice::Unfollow => "Unfollow someone",
            MenuChoice::ViewStats => "View followers/following",
            MenuChoice::PlayGame => "Play a mini game",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == s)
    }
}

/// Parse a video length in minutes; only positive whole numbers are accepted
pub fn parse_video_length(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|minutes| *minutes > 0)
}

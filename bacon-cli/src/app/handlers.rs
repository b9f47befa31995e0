use bacon_store::platform;
use bacon_types::{FollowStats, User, Video};
use std::io::{self, BufRead, Write};

use super::state::{parse_video_length, MenuChoice};
use super::App;
use crate::game::MiniGame;

/// How many posts the stats view lists
const RECENT_POSTS: usize = 3;

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn handle_choice(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::CreatePost => self.handle_create_post(),
            MenuChoice::UploadVideo => self.handle_upload_video(),
            MenuChoice::Follow => self.handle_follow(),
            MenuChoice::Unfollow => self.handle_unfollow(),
            MenuChoice::ViewStats => self.handle_view_stats(),
            MenuChoice::PlayGame => self.handle_play_game(),
            // The menu loop handles exit itself
            MenuChoice::Exit => Ok(()),
        }
    }

    fn handle_create_post(&mut self) -> io::Result<()> {
        let Some(content) = self.prompt("Enter your post content: ")? else {
            return Ok(());
        };
        let Some(image) = self.prompt("Enter image filename (optional): ")? else {
            return Ok(());
        };
        let image = image.trim();
        let image = (!image.is_empty()).then_some(image);

        match self.state.posts.create_post(&self.current_user, &content, image) {
            Ok(post_id) => {
                tracing::debug!("Post {} created by {}", post_id, self.current_user.username);
                writeln!(self.output, "Post created!")
            }
            Err(e) => {
                tracing::error!("Failed to create post: {}", e);
                writeln!(self.output, "Error creating post: {}", e)
            }
        }
    }

    fn handle_upload_video(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter video title: ")? else {
            return Ok(());
        };
        let Some(length) = self.prompt("Enter video length (in minutes): ")? else {
            return Ok(());
        };
        let Some(length) = parse_video_length(&length) else {
            return writeln!(self.output, "Please enter a valid number for video length.");
        };

        let mut video = Video::new(title, &self.current_user, length);
        match platform::add_video(&self.state.videos, &mut video) {
            Ok(video_id) => {
                tracing::debug!("Video {} is now {}", video_id, video.state().as_str());
                writeln!(self.output, "Video '{}' uploaded!", video.title())
            }
            Err(e) => {
                tracing::error!("Failed to upload video: {}", e);
                writeln!(self.output, "Error uploading video: {}", e)
            }
        }
    }

    fn handle_follow(&mut self) -> io::Result<()> {
        let prompt = "Enter the username of the person you want to follow: ";
        let Some(target) = self.find_user(prompt)? else {
            return Ok(());
        };

        // Following twice records a second edge; let the user know
        match self.state.follows.edges_between(&self.current_user, &target) {
            Ok(edges) if !edges.is_empty() => writeln!(
                self.output,
                "Note: you already follow {} ({} existing); this adds a duplicate follow.",
                target.username,
                edges.len()
            )?,
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not check existing follow: {}", e),
        }

        match self.state.follows.follow(&self.current_user, &target) {
            Ok(()) => writeln!(self.output, "You are now following {}.", target.username),
            Err(e) => {
                tracing::error!("Failed to follow {}: {}", target.username, e);
                writeln!(self.output, "Error following user: {}", e)
            }
        }
    }

    fn handle_unfollow(&mut self) -> io::Result<()> {
        let prompt = "Enter the username of the person you want to unfollow: ";
        let Some(target) = self.find_user(prompt)? else {
            return Ok(());
        };

        match self.state.follows.unfollow(&self.current_user, &target) {
            Ok(0) => writeln!(self.output, "You were not following {}.", target.username),
            Ok(_) => writeln!(self.output, "You unfollowed {}.", target.username),
            Err(e) => {
                tracing::error!("Failed to unfollow {}: {}", target.username, e);
                writeln!(self.output, "Error unfollowing user: {}", e)
            }
        }
    }

    fn handle_view_stats(&mut self) -> io::Result<()> {
        let user = &self.current_user;

        let stats = self.state.follows.stats(user).unwrap_or_else(|e| {
            tracing::error!("Error fetching follow counts: {}", e);
            FollowStats::default()
        });
        let posts = self.state.posts.post_count(user).unwrap_or_else(|e| {
            tracing::error!("Error fetching post count: {}", e);
            0
        });
        let videos = self.state.videos.count_for_user(user).unwrap_or_else(|e| {
            tracing::error!("Error fetching video count: {}", e);
            0
        });
        let recent = self.state.posts.get_by_user(user).unwrap_or_else(|e| {
            tracing::error!("Error fetching recent posts: {}", e);
            Vec::new()
        });

        writeln!(self.output, "Followers: {}", stats.followers)?;
        writeln!(self.output, "Following: {}", stats.following)?;
        writeln!(self.output, "Posts: {}", posts)?;
        writeln!(self.output, "Videos: {}", videos)?;

        if !recent.is_empty() {
            writeln!(self.output, "Recent posts:")?;
        }
        for post in recent.iter().take(RECENT_POSTS) {
            let stamp = post.timestamp.format("%Y-%m-%d %H:%M");
            match &post.image {
                Some(image) => writeln!(self.output, "  [{}] {} ({})", stamp, post.content, image)?,
                None => writeln!(self.output, "  [{}] {}", stamp, post.content)?,
            }
        }
        Ok(())
    }

    fn handle_play_game(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the game name (e.g., Minesweeper): ")? else {
            return Ok(());
        };

        let game = MiniGame::new(name.trim());
        writeln!(self.output, "Starting {}!", game.name())?;
        writeln!(self.output, "Playing...")?;
        let outcome = game.play(&mut self.rng);
        writeln!(self.output, "You {} the game!", outcome.as_str())
    }

    /// Prompt for a username and look it up, reporting when it doesn't exist.
    ///
    /// `Ok(None)` means there is nobody to act on; the caller just returns.
    fn find_user(&mut self, message: &str) -> io::Result<Option<User>> {
        let Some(username) = self.prompt(message)? else {
            return Ok(None);
        };
        let username = username.trim();

        match self.state.users.get_by_username(username) {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) => {
                writeln!(self.output, "User {} not found.", username)?;
                Ok(None)
            }
            Err(e) => {
                tracing::error!("Failed to look up {}: {}", username, e);
                writeln!(self.output, "Error looking up user: {}", e)?;
                Ok(None)
            }
        }
    }
}

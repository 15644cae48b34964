use std::io::Cursor;

use music_library::Shell;

fn run(script: &str) -> String {
    let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), 1024);
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn full_session_transcript() {
    let script = "\
I\nYesterday\nBeatles\nRock\n\
I\nImagine\nLennon\nRock\n\
I\nImagine\nSomeone\nPop\n\
P\n\
S\nImagine\n\
S\nHelp\n\
D\nYesterday\n\
D\nYesterday\n\
z\n\
Q\n";

    let expected = "\
Personal Music Library.\n\n\
Commands are I (insert), D (delete), S (search by song name),\n\
P (print), Q (quit).\n\
\nCommand --> Song name --> Artist --> Genre --> \
\nCommand --> Song name --> Artist --> Genre --> \
\nCommand --> Song name --> Artist --> Genre --> \
\nA song with the name 'Imagine' is already in the music library.\n\
No new song entered.\n\
\nCommand --> \
\nMy Personal Music Library: \n\
\nImagine\nLennon\nRock\n\
\nYesterday\nBeatles\nRock\n\
\nCommand --> \
\nEnter the name of the song to search for --> \
\nThe song name 'Imagine' was found in the music library.\n\
\nImagine\nLennon\nRock\n\
\nCommand --> \
\nEnter the name of the song to search for --> \
\nThe song name 'Help' was not found in the music library.\n\
\nCommand --> \
\nEnter the name of the song to be deleted --> \
\nDeleting a song with name 'Yesterday' from the music library.\n\
\nCommand --> \
\nEnter the name of the song to be deleted --> \
\nThe song name 'Yesterday' was not found in the music library.\n\
\nCommand --> \
\nInvalid command.\n\
\nCommand --> \
\nDeleting a song with name 'Imagine' from the music library.\n\
\nThe music library is empty.\n";

    assert_eq!(run(script), expected);
}

#[test]
fn lowercase_commands_are_accepted() {
    let output = run("i\nA\nX\nY\np\nq\n");
    assert!(output.contains("\nMy Personal Music Library: \n\nA\nX\nY\n"));
}
